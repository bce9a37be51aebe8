use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Review;

/// Review score, always within `1..=5`.
///
/// Deserialization goes through [`TryFrom<i32>`], so a body carrying an
/// out-of-range rating is rejected by the `Json` extractor before any handler
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Rating(i32);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Rating {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "rating must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateReviewRequest {
    pub content: String,
    #[schema(value_type = i32, minimum = 1, maximum = 5)]
    pub rating: Rating,
    pub user_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ReviewList {
    #[schema(value_type = Vec<Review>)]
    pub items: Vec<Review>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ratings_in_range() {
        for value in 1..=5 {
            assert_eq!(Rating::try_from(value).map(Rating::get), Ok(value));
        }
    }

    #[test]
    fn rejects_out_of_range_rating_in_body() {
        for body in [
            r#"{"content":"meh","rating":0,"user_id":1}"#,
            r#"{"content":"wow","rating":6,"user_id":1}"#,
        ] {
            let err = serde_json::from_str::<CreateReviewRequest>(body).unwrap_err();
            assert!(err.to_string().contains("rating must be between 1 and 5"));
        }
    }

    #[test]
    fn parses_valid_body() {
        let req: CreateReviewRequest =
            serde_json::from_str(r#"{"content":"Great hummus","rating":5,"user_id":3}"#).unwrap();
        assert_eq!(req.rating.get(), 5);
        assert_eq!(req.user_id, 3);
    }
}
