//! Headless doubles for the host view tree and the event loop.

use crate::card::Card;
use crate::models::Selection;
use crate::scheduler::Scheduler;
use crate::view::{FilterButton, FilterSurface, GridSurface};

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct GridLog {
    pub renders: usize,
    pub cards: Vec<Card>,
    pub empty_visible: bool,
    pub count: Option<String>,
}

impl GridLog {
    pub fn card_ids(&self) -> Vec<&'static str> {
        self.cards.iter().map(|card| card.id).collect()
    }
}

#[derive(Clone)]
pub struct RecordingGrid {
    log: Rc<RefCell<GridLog>>,
    has_count: bool,
}

impl RecordingGrid {
    pub fn new() -> Self {
        Self { log: Rc::default(), has_count: true }
    }

    pub fn without_count() -> Self {
        Self { log: Rc::default(), has_count: false }
    }

    pub fn log(&self) -> Ref<'_, GridLog> {
        self.log.borrow()
    }
}

impl GridSurface for RecordingGrid {
    fn replace_cards(&self, cards: Vec<Card>) {
        let mut log = self.log.borrow_mut();
        log.renders += 1;
        log.cards = cards;
    }

    fn set_empty_visible(&self, visible: bool) {
        self.log.borrow_mut().empty_visible = visible;
    }

    fn set_count_text(&self, text: &str) {
        if self.has_count {
            self.log.borrow_mut().count = Some(text.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedButton {
    pub marker: Selection,
    pub label: String,
    pub count: Option<usize>,
    pub active: bool,
}

#[derive(Clone)]
pub struct RecordingFilters {
    buttons: Rc<RefCell<Vec<RecordedButton>>>,
}

impl RecordingFilters {
    pub fn with_all_button(label: &str) -> Self {
        let all = RecordedButton {
            marker: Selection::All,
            label: label.to_string(),
            count: None,
            active: false,
        };
        Self { buttons: Rc::new(RefCell::new(vec![all])) }
    }

    pub fn without_all_button() -> Self {
        Self { buttons: Rc::default() }
    }

    pub fn buttons(&self) -> Ref<'_, Vec<RecordedButton>> {
        self.buttons.borrow()
    }

    pub fn active_markers(&self) -> Vec<Selection> {
        self.buttons
            .borrow()
            .iter()
            .filter(|button| button.active)
            .map(|button| button.marker.clone())
            .collect()
    }
}

impl FilterSurface for RecordingFilters {
    fn all_button_label(&self) -> Option<String> {
        self.buttons
            .borrow()
            .iter()
            .find(|button| button.marker.is_all())
            .map(|button| button.label.clone())
    }

    fn decorate_all_button(&self, label: &str, count: usize) {
        if let Some(button) = self.buttons.borrow_mut().iter_mut().find(|button| button.marker.is_all()) {
            button.label = label.to_string();
            button.count = Some(count);
        }
    }

    fn append_buttons(&self, buttons: Vec<FilterButton>) {
        self.buttons.borrow_mut().extend(buttons.into_iter().map(|button| RecordedButton {
            marker: Selection::Category(button.category),
            label: button.label,
            count: Some(button.count),
            active: false,
        }));
    }

    fn button_markers(&self) -> Vec<Selection> {
        self.buttons.borrow().iter().map(|button| button.marker.clone()).collect()
    }

    fn set_button_active(&self, index: usize, active: bool) {
        if let Some(button) = self.buttons.borrow_mut().get_mut(index) {
            button.active = active;
        }
    }
}

struct ScheduledTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    cancelled: usize,
    tasks: Vec<ScheduledTask>,
}

/// Scheduler driven by a virtual clock that only moves on [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward, running due tasks in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;

        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let position = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, scheduled)| scheduled.due <= target)
                    .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.id))
                    .map(|(position, _)| position);

                position.map(|position| {
                    let scheduled = clock.tasks.remove(position);
                    clock.now = scheduled.due;
                    scheduled.task
                })
            };

            match next {
                Some(task) => task(),
                None => break,
            }
        }

        self.clock.borrow_mut().now = target;
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    pub fn cancelled(&self) -> usize {
        self.clock.borrow().cancelled
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> u64 {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.tasks.push(ScheduledTask { id, due, task });
        id
    }

    fn cancel(&self, handle: u64) {
        let mut clock = self.clock.borrow_mut();
        let before = clock.tasks.len();
        clock.tasks.retain(|scheduled| scheduled.id != handle);
        assert!(clock.tasks.len() < before, "cancelled task {handle} is not pending");
        clock.cancelled += 1;
    }
}
