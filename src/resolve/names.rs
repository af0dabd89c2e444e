// src/resolve/names.rs
use crate::core::sanitize::non_blank;
use crate::data::Side;

/// One candidate field for a side's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Raw display name.
    Name,
    /// Display name of the team template.
    TemplateName,
    /// Raw template key.
    Template,
    /// Canonical page a renamed team redirects to.
    Redirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseRule {
    /// Upstream capitalization is inconsistent for the same entity.
    Lower,
    Preserve,
}

/// Usual precedence: display > template display > template.
pub const DISPLAY_FIRST: &[NameSource] = &[NameSource::Name, NameSource::TemplateName, NameSource::Template];
/// Template display wins when present; used where display names drift.
pub const TEMPLATE_FIRST: &[NameSource] = &[NameSource::TemplateName, NameSource::Name, NameSource::Template];
/// Individual competitors have no team template.
pub const INDIVIDUAL: &[NameSource] = &[NameSource::Name, NameSource::Template];
pub const NAME_ONLY: &[NameSource] = &[NameSource::Name];
pub const REDIRECT_FIRST: &[NameSource] = &[NameSource::Redirect, NameSource::Name];

pub fn candidate(side: &Side, source: NameSource) -> Option<&str> {
    match source {
        NameSource::Name => side.name.as_deref(),
        NameSource::TemplateName => side.template_name.as_deref(),
        NameSource::Template => side.template.as_deref(),
        NameSource::Redirect => side.redirect.as_deref(),
    }
}

/// First candidate that is neither null, empty nor the literal `False`.
pub fn first_non_blank<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().find_map(non_blank)
}

pub fn resolve(side: &Side, order: &[NameSource], case: CaseRule) -> Option<String> {
    let name = first_non_blank(order.iter().map(|src| candidate(side, *src)))?;
    Some(match case {
        CaseRule::Lower => name.to_lowercase(),
        CaseRule::Preserve => name.to_string(),
    })
}
