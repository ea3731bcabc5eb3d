//! In-memory content store.
//!
//! One `DashMap` per table, so every row is updated atomically and
//! concurrent saves to different slides never contend on a shared lock.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use lessonbldr_domain::{
    Group, GroupId, Lesson, LessonId, Module, ModuleId, Slide, SlideId, SlideUpdate,
};

use crate::infrastructure::ports::{ClockPort, ContentStore, RepoError};

pub struct InMemoryContentStore {
    modules: DashMap<ModuleId, Module>,
    lessons: DashMap<LessonId, Lesson>,
    groups: DashMap<GroupId, Group>,
    slides: DashMap<SlideId, Slide>,
    clock: Arc<dyn ClockPort>,
}

impl InMemoryContentStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            modules: DashMap::new(),
            lessons: DashMap::new(),
            groups: DashMap::new(),
            slides: DashMap::new(),
            clock,
        }
    }

    // Seeding. These overwrite rows with the same id.

    pub fn insert_module(&self, module: Module) {
        self.modules.insert(module.id, module);
    }

    pub fn insert_lesson(&self, lesson: Lesson) {
        self.lessons.insert(lesson.id, lesson);
    }

    pub fn insert_group(&self, group: Group) {
        self.groups.insert(group.id, group);
    }

    pub fn insert_slide(&self, slide: Slide) {
        self.slides.insert(slide.id, slide);
    }

    pub fn remove_group(&self, id: GroupId) -> Option<Group> {
        self.groups.remove(&id).map(|(_, group)| group)
    }
}

fn get_row<K, V>(table: &DashMap<K, V>, id: K, entity_type: &'static str) -> Result<V, RepoError>
where
    K: Eq + std::hash::Hash + std::fmt::Display,
    V: Clone,
{
    table
        .get(&id)
        .map(|row| row.value().clone())
        .ok_or_else(|| RepoError::not_found(entity_type, id))
}

fn filter_rows<K, V>(table: &DashMap<K, V>, keep: impl Fn(&V) -> bool) -> Vec<V>
where
    K: Eq + std::hash::Hash,
    V: Clone,
{
    table
        .iter()
        .filter(|row| keep(row.value()))
        .map(|row| row.value().clone())
        .collect()
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get_module(&self, id: ModuleId) -> Result<Module, RepoError> {
        get_row(&self.modules, id, "Module")
    }

    async fn list_modules(&self) -> Result<Vec<Module>, RepoError> {
        Ok(filter_rows(&self.modules, |_| true))
    }

    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, RepoError> {
        get_row(&self.lessons, id, "Lesson")
    }

    async fn list_lessons_by_module(&self, module_id: ModuleId) -> Result<Vec<Lesson>, RepoError> {
        Ok(filter_rows(&self.lessons, |lesson| {
            lesson.module_id == Some(module_id)
        }))
    }

    async fn get_group(&self, id: GroupId) -> Result<Group, RepoError> {
        get_row(&self.groups, id, "Group")
    }

    async fn list_groups_by_lesson(&self, lesson_id: LessonId) -> Result<Vec<Group>, RepoError> {
        Ok(filter_rows(&self.groups, |group| {
            group.lesson_id == Some(lesson_id)
        }))
    }

    async fn get_slide(&self, id: SlideId) -> Result<Slide, RepoError> {
        get_row(&self.slides, id, "Slide")
    }

    async fn list_slides_by_lesson(&self, lesson_id: LessonId) -> Result<Vec<Slide>, RepoError> {
        Ok(filter_rows(&self.slides, |slide| {
            slide.lesson_id == Some(lesson_id)
        }))
    }

    async fn list_slides_by_group(&self, group_id: GroupId) -> Result<Vec<Slide>, RepoError> {
        Ok(filter_rows(&self.slides, |slide| {
            slide.group_id == Some(group_id)
        }))
    }

    async fn update_slide(&self, id: SlideId, update: SlideUpdate) -> Result<Slide, RepoError> {
        let mut row = self
            .slides
            .get_mut(&id)
            .ok_or_else(|| RepoError::not_found("Slide", id))?;
        update.apply_to(row.value_mut());
        row.updated_at = Some(self.clock.now());
        Ok(row.value().clone())
    }

    async fn create_slide(&self, slide: &Slide) -> Result<(), RepoError> {
        match self.slides.entry(slide.id) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(RepoError::query_failed(
                "create_slide",
                format!("slide {} already exists", slide.id),
            )),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let mut row = slide.clone();
                row.updated_at = Some(self.clock.now());
                entry.insert(row);
                Ok(())
            }
        }
    }
}
