use anyhow::{bail, Context, Result};
use phf_codegen::Map;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const MANIFEST_TOML: &str = include_str!("Cargo.toml");

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    version: &'static str,
    id: String,
    title: String,
    catalog: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let id = Self::extract_string(metadata, "id")?;
        let title = Self::extract_string(metadata, "title")?;
        let catalog = Self::extract_string(metadata, "catalog")?;

        Ok(Self {
            name,
            version,
            id,
            title,
            catalog,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }
}

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    catalog_source_file: PathBuf,
    catalog_file: PathBuf,
}

impl BuildConfiguration {
    fn new(metadata: &ApplicationMetadata) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let output_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);

        Ok(Self {
            catalog_source_file: root.join(&metadata.catalog),
            catalog_file: output_dir.join("catalog.rs"),
        })
    }
}

// ===== CATALOG SOURCE =====

struct CourseRecord {
    id: String,
    title: String,
    category: String,
    mentor: String,
    price: String,
    image: String,
}

impl CourseRecord {
    fn from_table(index: usize, table: &toml::Table) -> Result<Self> {
        let field = |key: &str| -> Result<String> {
            table.get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .context(format!("Course #{index}: key '{key}' is missing or not a string"))
        };

        Ok(Self {
            id: field("id")?,
            title: field("title")?,
            category: field("category")?,
            mentor: field("mentor")?,
            price: field("price")?,
            image: field("image")?,
        })
    }
}

struct CatalogSource {
    courses: Vec<CourseRecord>,
    themes: Vec<(String, String)>,
}

impl CatalogSource {
    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog file {}", path.display()))?;
        let source = Self::parse(&text)?;
        source.validate()?;
        Ok(source)
    }

    fn parse(text: &str) -> Result<Self> {
        let document: toml::Value = toml::from_str(text)
            .context("Failed to parse catalog file")?;

        let courses = document.get("courses")
            .context("Missing [[courses]] entries in catalog file")?
            .as_array()
            .context("Key 'courses' is not an array")?
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let table = value.as_table()
                    .context(format!("Course #{index} is not a table"))?;
                CourseRecord::from_table(index, table)
            })
            .collect::<Result<Vec<_>>>()?;

        let themes = match document.get("themes") {
            None => Vec::new(),
            Some(value) => value.as_table()
                .context("Key 'themes' is not a table")?
                .iter()
                .map(|(category, class)| {
                    class.as_str()
                        .map(|class| (category.clone(), class.to_string()))
                        .context(format!("Theme for '{category}' is not a string"))
                })
                .collect::<Result<Vec<_>>>()?,
        };

        Ok(Self { courses, themes })
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for course in &self.courses {
            if course.id.trim().is_empty() {
                bail!("Course '{title}' has an empty id", title = course.title);
            }
            if !seen.insert(course.id.as_str()) {
                bail!("Duplicate course id '{id}' in catalog file", id = course.id);
            }
        }

        Ok(())
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn format_phf_theme_map(themes: &[(String, String)]) -> String {
        let mut phf_builder = Map::new();
        for (category, class) in themes {
            phf_builder.entry(category.as_str(), format!("{class:?}"));
        }

        phf_builder.build().to_string()
    }

    fn format_course_struct(course: &CourseRecord) -> String {
        format!(
            "Course {{
                id: {id:?},
                title: {title:?},
                category: {category:?},
                mentor: {mentor:?},
                price: {price:?},
                image: {image:?}
            }}",
            id = course.id,
            title = course.title,
            category = course.category,
            mentor = course.mentor,
            price = course.price,
            image = course.image
        )
    }

    fn format_courses_array(courses: &[CourseRecord]) -> String {
        courses.iter()
            .map(Self::format_course_struct)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn build_catalog_struct_code(source: &CatalogSource) -> String {
        let courses_array = Self::format_courses_array(&source.courses);
        let themes_map = Self::format_phf_theme_map(&source.themes);

        format!(
            "Catalog {{
                courses: &[{courses_array}],
                themes: {themes_map}
            }}"
        )
    }
}

// ===== CATALOG PROCESSOR =====

struct CatalogProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> CatalogProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_catalog_data(&self) -> Result<()> {
        let source = CatalogSource::load(&self.config.catalog_source_file)?;
        let catalog_code = CatalogCodeBuilder::build_catalog_struct_code(&source);

        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_application_metadata(metadata: &ApplicationMetadata) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
    }
}

// ===== BUILD ENVIRONMENT =====

struct BuildEnvironment;

impl BuildEnvironment {
    fn setup_cargo_configuration(config: &BuildConfiguration) {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=Cargo.toml");
        println!("cargo:rerun-if-changed={}", config.catalog_source_file.display());
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        let app_metadata = ApplicationMetadata::extract_from_cargo()?;
        let config = BuildConfiguration::new(&app_metadata)?;
        Ok(Self { config, app_metadata })
    }

    fn execute_complete_build(&self) -> Result<()> {
        BuildEnvironment::setup_cargo_configuration(&self.config);
        CatalogProcessor::new(&self.config).process_catalog_data()?;
        CargoEnvironmentVariables::emit_application_metadata(&self.app_metadata);
        Ok(())
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
