//! Scoring of quiz answers.
//!
//! A learner answers a question by selecting some of its choices. The pure
//! [`grade`] function decides whether a selection is correct; the async
//! helpers load the choices from the database first.

use crate::{
    error::{Error, Result},
    services::{question, submission},
};
use entity::{choices, enrollments, question_courses, questions};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Percentage needed to pass an exam.
pub const PASS_THRESHOLD: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingPolicy {
    /// The selected choices of the question are exactly its correct choices.
    #[default]
    ExactMatch,
    /// Every correct choice is selected. Selected incorrect choices are not
    /// counted against the learner.
    CorrectCount,
}

/// Grades a selection against the choices of one question. Selected ids that
/// belong to other questions are ignored.
pub fn grade(policy: GradingPolicy, choices: &[choices::Model], selected: &BTreeSet<i32>) -> bool {
    let correct: BTreeSet<i32> = choices
        .iter()
        .filter(|choice| choice.is_correct)
        .map(|choice| choice.id)
        .collect();

    match policy {
        GradingPolicy::ExactMatch => {
            let picked: BTreeSet<i32> = choices
                .iter()
                .map(|choice| choice.id)
                .filter(|id| selected.contains(id))
                .collect();

            picked == correct
        }
        GradingPolicy::CorrectCount => {
            correct.intersection(selected).count() == correct.len()
        }
    }
}

pub async fn answered_correctly<C: ConnectionTrait>(
    db: &C,
    question_id: i32,
    selected: &BTreeSet<i32>,
) -> Result<bool> {
    answered_correctly_with(db, GradingPolicy::default(), question_id, selected).await
}

pub async fn answered_correctly_with<C: ConnectionTrait>(
    db: &C,
    policy: GradingPolicy,
    question_id: i32,
    selected: &BTreeSet<i32>,
) -> Result<bool> {
    let choices = question::choices(db, question_id).await?;
    Ok(grade(policy, &choices, selected))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionOutcome {
    pub question_id: i32,
    pub marks: f64,
    pub correct: bool,
    /// Choices of this question the learner selected.
    pub selected: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamResult {
    pub submission_id: i32,
    pub earned: f64,
    pub possible: f64,
    pub questions: Vec<QuestionOutcome>,
}

impl ExamResult {
    /// Earned marks as a percentage of the possible marks. An exam without
    /// marks scores zero.
    pub fn percentage(&self) -> f64 {
        if self.possible <= 0.0 {
            return 0.0;
        }

        self.earned / self.possible * 100.0
    }

    pub fn passed(&self, threshold: f64) -> bool {
        self.percentage() >= threshold
    }
}

/// Grades every question of the submission's course.
pub async fn exam_result<C: ConnectionTrait>(
    db: &C,
    submission_id: i32,
    policy: GradingPolicy,
) -> Result<ExamResult> {
    let submission = submission::get(db, submission_id).await?;

    let selected: BTreeSet<i32> = submission::choices(db, submission_id)
        .await?
        .into_iter()
        .map(|choice| choice.id)
        .collect();

    let course_id: i32 = enrollments::Entity::find_by_id(submission.enrollment_id)
        .select_only()
        .column(enrollments::Column::CourseId)
        .into_tuple()
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("enrollment", submission.enrollment_id))?;

    let questions = questions::Entity::find()
        .inner_join(question_courses::Entity)
        .filter(question_courses::Column::CourseId.eq(course_id))
        .order_by_asc(questions::Column::Id)
        .all(db)
        .await?;

    let mut choices_by_question: BTreeMap<i32, Vec<choices::Model>> = BTreeMap::new();
    if !questions.is_empty() {
        let choices = choices::Entity::find()
            .filter(choices::Column::QuestionId.is_in(questions.iter().map(|q| q.id)))
            .order_by_asc(choices::Column::Id)
            .all(db)
            .await?;

        for choice in choices {
            if let Some(question_id) = choice.question_id {
                choices_by_question.entry(question_id).or_default().push(choice);
            }
        }
    }

    let mut result = ExamResult {
        submission_id,
        earned: 0.0,
        possible: 0.0,
        questions: Vec::with_capacity(questions.len()),
    };

    for question in questions {
        let choices = choices_by_question.remove(&question.id).unwrap_or_default();
        let correct = grade(policy, &choices, &selected);

        result.possible += question.marks;
        if correct {
            result.earned += question.marks;
        }

        result.questions.push(QuestionOutcome {
            question_id: question.id,
            marks: question.marks,
            correct,
            selected: choices
                .iter()
                .map(|choice| choice.id)
                .filter(|id| selected.contains(id))
                .collect(),
        });
    }

    tracing::debug!(
        submission = submission_id,
        earned = result.earned,
        possible = result.possible,
        "graded submission"
    );

    Ok(result)
}
