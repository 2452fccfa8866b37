use crate::model::QuestionSet;

/// One line of the end-of-game recap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecapEntry {
    /// 1-based question number.
    pub number: usize,
    pub prompt: String,
    pub answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub points: u32,
}

/// Aggregate outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recap {
    entries: Vec<RecapEntry>,
    score: u32,
    total_points: u32,
}

impl Recap {
    /// Build the recap from the question set and the answers recorded so far.
    ///
    /// Questions without a recorded answer are listed with `answer: None`.
    #[must_use]
    pub fn build(questions: &QuestionSet, answers: &[String]) -> Self {
        let entries: Vec<RecapEntry> = questions
            .iter()
            .enumerate()
            .map(|(idx, question)| {
                let answer = answers.get(idx).cloned();
                let is_correct = answer
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer));
                RecapEntry {
                    number: idx + 1,
                    prompt: question.prompt().to_owned(),
                    answer,
                    correct_answer: question.correct_answer().to_owned(),
                    is_correct,
                    points: question.points(),
                }
            })
            .collect();

        let score = entries
            .iter()
            .filter(|entry| entry.is_correct)
            .map(|entry| entry.points)
            .sum();

        Self {
            entries,
            score,
            total_points: questions.total_points(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[RecapEntry] {
        &self.entries
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_correct).count()
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total_points
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.is_perfect() {
            "Congratulations!"
        } else {
            "Good effort!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recap_scores_only_correct_answers() {
        let questions = QuestionSet::reference().unwrap();
        let answers = vec!["bus".to_string(), "blue".to_string(), "downtown".to_string()];

        let recap = Recap::build(&questions, &answers);

        assert_eq!(recap.entries().len(), 5);
        assert_eq!(recap.score(), 1 + 3);
        assert_eq!(recap.total_points(), 15);
        assert_eq!(recap.correct_count(), 2);
        assert!(!recap.entries()[1].is_correct);
        assert_eq!(recap.entries()[4].answer, None);
        assert!(!recap.entries()[4].is_correct);
        assert_eq!(recap.headline(), "Good effort!");
    }

    #[test]
    fn perfect_recap_congratulates() {
        let questions = QuestionSet::reference().unwrap();
        let answers: Vec<String> = questions
            .iter()
            .map(|q| q.correct_answer().to_owned())
            .collect();

        let recap = Recap::build(&questions, &answers);

        assert!(recap.is_perfect());
        assert_eq!(recap.headline(), "Congratulations!");
        assert_eq!(recap.entries()[0].number, 1);
    }
}
