//! The selection resolver.
//!
//! `resolve` is a best-effort query: it looks up one text field by identifier,
//! checks that the document's active selection belongs to that field and
//! reports the field's native selection offsets. It never fails; every miss is
//! `None`. [`try_resolve`] exposes the reason for a miss.

use serde_json::Value;
use thiserror::Error;

use crate::config::{CollapsedPolicy, ResolverConfig};
use crate::host::SelectionHost;
use crate::key::{ElementKey, KeyError};
use crate::offsets::{SelectionOffsets, SelectionResult};

/// Attributes written on a matched field to keep autofill and password
/// managers from rewriting its content or stealing its selection.
pub const AUTOFILL_GUARD_ATTRIBUTES: [(&str, &str); 3] = [
    ("autocomplete", "off"),
    ("data-form-type", "other"),
    ("data-lpignore", "true"),
];

/// Why nothing was reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Miss {
    #[error("identifier could not be parsed: {0}")]
    MalformedIdentifier(#[from] KeyError),
    #[error("no candidate matches the identifier")]
    NoMatch,
    #[error("the document has no active selection range")]
    NoSelection,
    #[error("the active selection belongs to other content")]
    NotOwned,
    #[error("the matched element exposes no selection offsets")]
    NoNativeOffsets,
    #[error("the selection is collapsed")]
    Collapsed,
}

/// Resolve the selection of the field identified by `identifier`.
///
/// `identifier` may be a raw identifier or a serialized structured token.
pub fn resolve<H: SelectionHost>(
    host: &mut H,
    identifier: &str,
    config: &ResolverConfig,
) -> SelectionResult {
    let target = ElementKey::parse(identifier, &config.token_field);
    finish(target.map_err(Miss::from).and_then(|key| try_resolve(host, &key, config)))
}

/// Like [`resolve`], for identifiers the host already decoded (a props object
/// or structured id passed as an object rather than a string).
pub fn resolve_value<H: SelectionHost>(
    host: &mut H,
    identifier: Value,
    config: &ResolverConfig,
) -> SelectionResult {
    let target = ElementKey::from_value(identifier, &config.token_field);
    finish(target.map_err(Miss::from).and_then(|key| try_resolve(host, &key, config)))
}

pub fn try_resolve<H: SelectionHost>(
    host: &mut H,
    target: &ElementKey,
    config: &ResolverConfig,
) -> Result<SelectionOffsets, Miss> {
    let element = find_field(host, target, config).ok_or(Miss::NoMatch)?;

    // Hardening applies to every match, reported selection or not.
    harden_autofill(host, &element);

    let anchor = host.range_anchor().ok_or(Miss::NoSelection)?;
    let owned = anchor
        .owner
        .as_ref()
        .is_some_and(|owner| host.is_same_element(owner, &element));
    if !owned {
        return Err(Miss::NotOwned);
    }

    let offsets = host
        .native_offsets(&element)
        .map(SelectionOffsets::from)
        .ok_or(Miss::NoNativeOffsets)?;

    if offsets.is_collapsed() && config.collapsed == CollapsedPolicy::Suppress {
        return Err(Miss::Collapsed);
    }
    Ok(offsets)
}

/// Write [`AUTOFILL_GUARD_ATTRIBUTES`] on `element`. Idempotent.
///
/// A failed write is logged and skipped; it never aborts resolution.
pub fn harden_autofill<H: SelectionHost>(host: &mut H, element: &H::Element) {
    for (name, value) in AUTOFILL_GUARD_ATTRIBUTES {
        if host.attribute(element, name).as_deref() == Some(value) {
            continue;
        }
        if let Err(err) = host.set_attribute(element, name, value) {
            log::warn!(target: "selection.resolve", "{err}");
        }
    }
}

fn find_field<H: SelectionHost>(
    host: &H,
    target: &ElementKey,
    config: &ResolverConfig,
) -> Option<H::Element> {
    host.candidates(&config.candidate_tag)
        .into_iter()
        .find(|candidate| {
            let Some(raw) = host.attribute(candidate, &config.id_attribute) else {
                return false;
            };
            match ElementKey::parse(&raw, &config.token_field) {
                Ok(key) => key == *target,
                Err(err) => {
                    log::debug!(
                        target: "selection.resolve",
                        "skipping candidate with {}={raw:?}: {err}",
                        config.id_attribute
                    );
                    false
                }
            }
        })
}

fn finish(outcome: Result<SelectionOffsets, Miss>) -> SelectionResult {
    match outcome {
        Ok(offsets) => {
            log::trace!(
                target: "selection.resolve",
                "selection {}..{}",
                offsets.start(),
                offsets.end()
            );
            Some(offsets)
        }
        Err(miss) => {
            log::debug!(target: "selection.resolve", "nothing to report: {miss}");
            None
        }
    }
}
