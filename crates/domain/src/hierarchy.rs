//! Curriculum hierarchy builder.
//!
//! Turns flat module/lesson/group/slide collections into parent-keyed,
//! sibling-sorted buckets:
//!
//! - `modules_by_level` - key is the upper-cased level
//! - `lessons_by_module`
//! - `groups_by_lesson`
//! - `slides_by_group`
//! - `ungrouped_slides_by_lesson`
//!
//! Rows whose required parent key is missing are left out of every bucket
//! and reported in [`CurriculumHierarchy::orphans`] so the caller decides
//! whether that is worth a warning. Building never fails.
//!
//! Nothing is cached: every call rebuilds from the rows it is given.

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::entities::{Group, Lesson, Module, Slide};
use crate::ids::{GroupId, LessonId, ModuleId};
use crate::value_objects::sort_siblings;

/// Which kind of row was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrphanKind {
    Module,
    Lesson,
    Group,
    Slide,
}

impl fmt::Display for OrphanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrphanKind::Module => write!(f, "module"),
            OrphanKind::Lesson => write!(f, "lesson"),
            OrphanKind::Group => write!(f, "group"),
            OrphanKind::Slide => write!(f, "slide"),
        }
    }
}

/// A row excluded from the hierarchy because its parent key is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub kind: OrphanKind,
    pub id: Uuid,
    /// Name of the missing parent key (e.g. "moduleId")
    pub missing: &'static str,
}

/// Grouped and sorted view over the whole curriculum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurriculumHierarchy {
    pub modules_by_level: BTreeMap<String, Vec<Module>>,
    pub lessons_by_module: BTreeMap<ModuleId, Vec<Lesson>>,
    pub groups_by_lesson: BTreeMap<LessonId, Vec<Group>>,
    pub slides_by_group: BTreeMap<GroupId, Vec<Slide>>,
    pub ungrouped_slides_by_lesson: BTreeMap<LessonId, Vec<Slide>>,
    pub orphans: Vec<Orphan>,
}

impl CurriculumHierarchy {
    /// Build the hierarchy from flat rows.
    pub fn build(
        modules: impl IntoIterator<Item = Module>,
        lessons: impl IntoIterator<Item = Lesson>,
        groups: impl IntoIterator<Item = Group>,
        slides: impl IntoIterator<Item = Slide>,
    ) -> Self {
        let mut hierarchy = Self::default();

        for module in modules {
            let key = module.level_key();
            if key.is_empty() {
                hierarchy.orphan(OrphanKind::Module, module.id.to_uuid(), "level");
                continue;
            }
            hierarchy.modules_by_level.entry(key).or_default().push(module);
        }

        for lesson in lessons {
            match lesson.module_id {
                Some(module_id) => hierarchy
                    .lessons_by_module
                    .entry(module_id)
                    .or_default()
                    .push(lesson),
                None => hierarchy.orphan(OrphanKind::Lesson, lesson.id.to_uuid(), "moduleId"),
            }
        }

        for group in groups {
            match group.lesson_id {
                Some(lesson_id) => hierarchy
                    .groups_by_lesson
                    .entry(lesson_id)
                    .or_default()
                    .push(group),
                None => hierarchy.orphan(OrphanKind::Group, group.id.to_uuid(), "lessonId"),
            }
        }

        // A slide always needs its lesson, even when it sits in a group.
        for slide in slides {
            match (slide.lesson_id, slide.group_id) {
                (None, _) => hierarchy.orphan(OrphanKind::Slide, slide.id.to_uuid(), "lessonId"),
                (Some(_), Some(group_id)) => hierarchy
                    .slides_by_group
                    .entry(group_id)
                    .or_default()
                    .push(slide),
                (Some(lesson_id), None) => hierarchy
                    .ungrouped_slides_by_lesson
                    .entry(lesson_id)
                    .or_default()
                    .push(slide),
            }
        }

        hierarchy.sort_buckets();
        hierarchy
    }

    fn orphan(&mut self, kind: OrphanKind, id: Uuid, missing: &'static str) {
        self.orphans.push(Orphan { kind, id, missing });
    }

    fn sort_buckets(&mut self) {
        self.modules_by_level.values_mut().for_each(|b| sort_siblings(b));
        self.lessons_by_module.values_mut().for_each(|b| sort_siblings(b));
        self.groups_by_lesson.values_mut().for_each(|b| sort_siblings(b));
        self.slides_by_group.values_mut().for_each(|b| sort_siblings(b));
        self.ungrouped_slides_by_lesson
            .values_mut()
            .for_each(|b| sort_siblings(b));
    }

    pub fn lessons_of(&self, module_id: ModuleId) -> &[Lesson] {
        self.lessons_by_module
            .get(&module_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn groups_of(&self, lesson_id: LessonId) -> &[Group] {
        self.groups_by_lesson
            .get(&lesson_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn slides_of_group(&self, group_id: GroupId) -> &[Slide] {
        self.slides_by_group
            .get(&group_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn ungrouped_slides_of(&self, lesson_id: LessonId) -> &[Slide] {
        self.ungrouped_slides_by_lesson
            .get(&lesson_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of slides placed in any bucket.
    pub fn slide_count(&self) -> usize {
        self.slides_by_group.values().map(Vec::len).sum::<usize>()
            + self.ungrouped_slides_by_lesson.values().map(Vec::len).sum::<usize>()
    }
}
