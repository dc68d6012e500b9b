//! Question selector component

use quiz_core::{join_path, parse_categories, DocPath, Document, QuizError, Result, Segment};
use rand::Rng;

/// Stateful selector over delimited question categories.
///
/// Holds the parsed category paths and a lazily computed offset table:
/// the running cumulative sum of category lengths with a leading 0, so
/// `offsets[i+1] - offsets[i]` is the length of category `i` and the
/// last entry is the total question count. The table is cached after
/// the first use and recomputed only after [`invalidate`].
///
/// [`invalidate`]: QuestionSelector::invalidate
#[derive(Debug, Clone)]
pub struct QuestionSelector {
    categories: Vec<DocPath>,
    offsets: Option<Vec<usize>>,
}

impl QuestionSelector {
    /// Create a selector from a delimited category specification
    /// (`"quiz.easy;quiz.hard"`)
    pub fn new(category_spec: &str) -> Self {
        Self {
            categories: parse_categories(category_spec),
            offsets: None,
        }
    }

    /// The parsed category paths
    pub fn categories(&self) -> &[DocPath] {
        &self.categories
    }

    /// The cached offset table, if initialized
    pub fn offsets(&self) -> Option<&[usize]> {
        self.offsets.as_deref()
    }

    /// Whether the offset table has been computed
    pub fn is_initialized(&self) -> bool {
        self.offsets.is_some()
    }

    /// Compute and cache the offset table against `doc`.
    ///
    /// Idempotent: a no-op when the table is already cached.
    pub fn init_categories(&mut self, doc: &Document) {
        if self.offsets.is_some() {
            return;
        }
        let offsets = Self::build_offsets(&self.categories, doc);
        log::debug!(
            "Initialized {} categories, {} questions total",
            self.categories.len(),
            offsets.last().copied().unwrap_or(0)
        );
        self.offsets = Some(offsets);
    }

    /// Drop the cached table so the next selection recomputes it
    /// (call after the document changes)
    pub fn invalidate(&mut self) {
        self.offsets = None;
    }

    /// Total number of questions across all categories
    /// (None until initialized)
    pub fn total_questions(&self) -> Option<usize> {
        self.offsets.as_ref().and_then(|o| o.last().copied())
    }

    /// Pick the next question uniformly across the flattened categories.
    ///
    /// Returns the selected category's path with the local index
    /// appended: the full path of the new question within `doc`.
    /// Initializes the offset table first if needed. When every
    /// category is empty there is nothing to draw from and
    /// [`QuizError::NoQuestions`] is returned.
    pub fn select_next<R: Rng>(&mut self, doc: &Document, rng: &mut R) -> Result<DocPath> {
        let categories = &self.categories;
        let offsets = self
            .offsets
            .get_or_insert_with(|| Self::build_offsets(categories, doc));

        let total = offsets.last().copied().unwrap_or(0);
        if total == 0 {
            return Err(QuizError::NoQuestions);
        }

        let pick = rng.gen_range(0..total);

        // find the category whose contiguous range contains the pick
        let category = match offsets
            .windows(2)
            .position(|w| pick >= w[0] && pick < w[1])
        {
            Some(index) => index,
            None => return Err(QuizError::NoQuestions),
        };

        let mut path = self.categories[category].clone();
        path.push(Segment::Index(pick - offsets[category]));
        log::debug!("Selected question {} ({} of {})", join_path(&path), pick, total);
        Ok(path)
    }

    fn build_offsets(categories: &[DocPath], doc: &Document) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(categories.len() + 1);
        let mut total = 0;
        offsets.push(0);
        for category in categories {
            total += doc.sequence_len(category);
            offsets.push(total);
        }
        offsets
    }
}
