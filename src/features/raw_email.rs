// Pass-through of the raw email fields.

use indexmap::IndexMap;

use super::traits::{FeatureGenerator, FeatureValue};
use crate::error::Result;
use crate::models::Email;

pub struct RawEmailGenerator;

impl FeatureGenerator for RawEmailGenerator {
    fn name(&self) -> &'static str {
        "raw_email"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &["email_subject", "email_body"]
    }

    fn generate(&self, email: &Email) -> Result<IndexMap<String, FeatureValue>> {
        Ok(IndexMap::from([
            (
                "email_subject".to_string(),
                FeatureValue::Text(email.subject.clone()),
            ),
            (
                "email_body".to_string(),
                FeatureValue::Text(email.body.clone()),
            ),
        ]))
    }
}
