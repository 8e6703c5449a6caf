use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::value_objects::{RecommendInput, RecommendationOutcome},
};

/// Opaque text-completion endpoint. The implementation decides transport and
/// model id; the domain only sees prompt in, text out.
#[cfg_attr(test, mockall::automock)]
pub trait ModelClient: Send + Sync {
    fn complete(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        input: RecommendInput,
    ) -> impl Future<Output = Result<RecommendationOutcome, CoreError>> + Send;
}
