pub mod article;
pub mod product;
pub mod quote;
pub mod user;
pub mod video;
pub mod webinar;

/// Shared merge rule for every patch form: a supplied value overwrites the
/// target field, an omitted one leaves it alone.
pub(crate) fn patch<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
