use super::course::Course;

#[derive(Debug)]
pub struct Catalog {
    pub courses: &'static [Course],
    pub themes: phf::Map<&'static str, &'static str>,
}
