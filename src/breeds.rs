//! Breed records and their user ratings.
//!
//! Ratings live in memory only and start at zero on every launch.

use thiserror::Error;

/// Highest number of stars a breed can receive
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreedError {
    #[error("rating must be between 1 and 5 stars, got {0}")]
    InvalidStars(u8),

    #[error("no breed at position {0}")]
    UnknownBreed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedRecord {
    pub name: String,
    pub description: String,
    pub rating: u8, // 0 = unrated, otherwise 1..=MAX_STARS
}

impl BreedRecord {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            rating: 0,
        }
    }

    /// Whether star `star` (1-based) is lit for the current rating
    pub fn is_star_filled(&self, star: u8) -> bool {
        star <= self.rating
    }
}

/// Ordered list of breeds. Order is fixed at construction.
#[derive(Debug, Clone)]
pub struct BreedList {
    breeds: Vec<BreedRecord>,
}

impl BreedList {
    /// The five breeds shown on the breeds tab, all unrated
    pub fn seeded() -> Self {
        Self {
            breeds: vec![
                BreedRecord::new(
                    "Siamese",
                    "Known for their distinctive color points and blue eyes.",
                ),
                BreedRecord::new(
                    "Maine Coon",
                    "One of the largest domestic cat breeds, known for their intelligence and playful personality.",
                ),
                BreedRecord::new("Persian", "Recognized for their long fur and flat faces."),
                BreedRecord::new(
                    "Bengal",
                    "Known for their wild appearance and energetic personality.",
                ),
                BreedRecord::new(
                    "Sphynx",
                    "Distinctive for their lack of fur and wrinkled skin.",
                ),
            ],
        }
    }

    /// Set the rating of the breed at `index` to exactly `stars`.
    ///
    /// Rejected inputs leave every rating untouched.
    pub fn rate(&mut self, index: usize, stars: u8) -> Result<&BreedRecord, BreedError> {
        if !(1..=MAX_STARS).contains(&stars) {
            return Err(BreedError::InvalidStars(stars));
        }
        let breed = self
            .breeds
            .get_mut(index)
            .ok_or(BreedError::UnknownBreed(index))?;
        breed.rating = stars;
        Ok(breed)
    }

    pub fn get(&self, index: usize) -> Option<&BreedRecord> {
        self.breeds.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreedRecord> {
        self.breeds.iter()
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }
}

impl Default for BreedList {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED_ORDER: [&str; 5] = ["Siamese", "Maine Coon", "Persian", "Bengal", "Sphynx"];

    fn names(list: &BreedList) -> Vec<&str> {
        list.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_seeded_breeds_start_unrated() {
        let list = BreedList::seeded();
        assert_eq!(list.len(), 5);
        assert_eq!(names(&list), SEED_ORDER);
        assert!(list.iter().all(|b| b.rating == 0));
    }

    #[test]
    fn test_rate_sets_exact_star_and_leaves_others() {
        for index in 0..5 {
            for stars in 1..=MAX_STARS {
                let mut list = BreedList::seeded();
                list.rate(index, stars).unwrap();

                for (i, breed) in list.iter().enumerate() {
                    let expected = if i == index { stars } else { 0 };
                    assert_eq!(breed.rating, expected, "breed {} after rating {} with {}", i, index, stars);
                }
            }
        }
    }

    #[test]
    fn test_rerating_overwrites_previous_value() {
        let mut list = BreedList::seeded();
        list.rate(2, 5).unwrap();
        list.rate(2, 1).unwrap();
        assert_eq!(list.get(2).unwrap().rating, 1);
    }

    #[test]
    fn test_invalid_input_is_rejected_without_changes() {
        let mut list = BreedList::seeded();
        list.rate(1, 3).unwrap();

        assert_eq!(list.rate(1, 0).unwrap_err(), BreedError::InvalidStars(0));
        assert_eq!(list.rate(1, 6).unwrap_err(), BreedError::InvalidStars(6));
        assert_eq!(list.rate(5, 2).unwrap_err(), BreedError::UnknownBreed(5));

        assert_eq!(list.get(1).unwrap().rating, 3);
        assert_eq!(list.iter().map(|b| b.rating).sum::<u8>(), 3);
    }

    #[test]
    fn test_order_is_stable_across_ratings() {
        let mut list = BreedList::seeded();
        for (index, stars) in [(4, 5), (0, 1), (3, 2), (4, 3), (1, 4), (2, 5)] {
            list.rate(index, stars).unwrap();
        }
        assert_eq!(names(&list), SEED_ORDER);
    }

    #[test]
    fn test_star_fill() {
        let mut list = BreedList::seeded();
        let breed = list.rate(0, 3).unwrap();
        let lit: Vec<bool> = (1..=MAX_STARS).map(|s| breed.is_star_filled(s)).collect();
        assert_eq!(lit, [true, true, true, false, false]);
    }
}
