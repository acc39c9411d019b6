#![forbid(unsafe_code)]

//! Building panes from documents.

use std::fmt;
use std::str::FromStr;

use slotpane_core::geometry::SlotPos;
use slotpane_layout::{OutlinePane, Pane, PaneItem, PaneKind, Priority, StaticPane};

use crate::decoder::ItemDecoder;
use crate::document::{ItemElement, parse_document, parse_root};
use crate::error::{ConfigError, Result};
use crate::registry::CallbackRegistry;

/// Root element wrapping several panes.
pub const DOCUMENT_ROOT: &str = "panes";

/// Element name of a hidden placeholder item.
pub const EMPTY_ITEM: &str = "empty";

/// Loads panes from XML, decoding items with `D`.
#[derive(Debug)]
pub struct PaneLoader<D: ItemDecoder> {
    decoder: D,
    registry: CallbackRegistry<D::Item>,
}

impl<D: ItemDecoder> PaneLoader<D> {
    pub fn new(decoder: D) -> Self {
        Self::with_registry(decoder, CallbackRegistry::new())
    }

    pub fn with_registry(decoder: D, registry: CallbackRegistry<D::Item>) -> Self {
        Self { decoder, registry }
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn registry(&self) -> &CallbackRegistry<D::Item> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CallbackRegistry<D::Item> {
        &mut self.registry
    }

    /// Load a document whose root element is a single pane.
    pub fn load_pane(&self, xml: &str) -> Result<Pane<D::Item>> {
        let root = parse_root(xml)?;
        self.build_pane(&root)
    }

    /// Load every pane of a document.
    ///
    /// The document is either a `<panes>` root holding pane elements or a
    /// bare pane element. Panes that fail to build are skipped with a
    /// warning; only malformed XML fails the whole call.
    pub fn load_panes(&self, xml: &str) -> Result<Vec<Pane<D::Item>>> {
        let roots = parse_document(xml)?;
        let mut panes = Vec::new();
        for root in &roots {
            let elements = if root.name == DOCUMENT_ROOT {
                root.children.as_slice()
            } else {
                std::slice::from_ref(root)
            };
            for element in elements {
                match self.build_pane(element) {
                    Ok(pane) => panes.push(pane),
                    Err(err) => {
                        tracing::warn!(element = %element.name, error = %err, "skipping pane");
                    }
                }
            }
        }
        tracing::debug!(count = panes.len(), "loaded panes");
        Ok(panes)
    }

    /// Like [`load_pane`](Self::load_pane), logging the failure instead of
    /// returning it.
    pub fn load_pane_or_report(&self, xml: &str) -> Option<Pane<D::Item>> {
        match self.load_pane(xml) {
            Ok(pane) => Some(pane),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load pane");
                None
            }
        }
    }

    /// Build one pane from its element.
    pub fn build_pane(&self, element: &ItemElement) -> Result<Pane<D::Item>> {
        let kind: PaneKind = element.name.parse().map_err(|_| ConfigError::UnknownPane {
            tag: element.name.clone(),
        })?;
        let origin = SlotPos::new(required(element, "x")?, required(element, "y")?);
        let length = required(element, "length")?;
        let height = required(element, "height")?;
        let rotation: Option<i32> = optional(element, "rotation")?;
        let flip_horizontal = flag(element, "flipHorizontally");
        let flip_vertical = flag(element, "flipVertically");
        let visible = element.attr("visible").is_none_or(is_true);
        let priority: Priority = optional(element, "priority")?.unwrap_or_default();
        let populate = element.attr("populate");

        let mut pane: Pane<D::Item> = match kind {
            PaneKind::Outline => {
                let mut pane = OutlinePane::new(origin, length, height);
                if let Some(orientation) = element.attr("orientation") {
                    pane.set_orientation(orientation.parse()?);
                }
                if let Some(gap) = optional(element, "gap")? {
                    pane.set_gap(gap);
                }
                pane.set_repeat(flag(element, "repeat"));
                if let Some(degrees) = rotation {
                    pane.try_set_rotation(degrees)?;
                }
                pane.flip_horizontally(flip_horizontal);
                pane.flip_vertically(flip_vertical);
                pane.set_visible(visible);
                pane.set_priority(priority);
                if populate.is_none() {
                    for child in &element.children {
                        if let Some(item) = self.report(child, self.build_item(child)) {
                            pane.add_item(item);
                        }
                    }
                }
                pane.into()
            }
            PaneKind::Static => {
                let mut pane = StaticPane::new(origin, length, height);
                if let Some(degrees) = rotation {
                    pane.try_set_rotation(degrees)?;
                }
                pane.flip_horizontally(flip_horizontal);
                pane.flip_vertically(flip_vertical);
                pane.set_visible(visible);
                pane.set_priority(priority);
                if populate.is_none() {
                    for child in &element.children {
                        if let Some((item, position)) = self.report(child, self.build_pinned(child)) {
                            pane.add_item(item, position);
                        }
                    }
                }
                pane.into()
            }
        };

        if let Some(name) = populate {
            match self.registry.populator(name) {
                Some(populator) => populator(&mut pane),
                None => tracing::warn!(populator = name, "no populator registered, pane left empty"),
            }
        }
        Ok(pane)
    }

    fn build_item(&self, element: &ItemElement) -> Result<PaneItem<D::Item>> {
        let mut item = if element.name == EMPTY_ITEM {
            PaneItem::hidden(self.decoder.placeholder())
        } else {
            PaneItem::new(self.decoder.decode(element)?)
        };
        if let Some(name) = element.attr("onClick") {
            let action = self
                .registry
                .action(name)
                .ok_or_else(|| ConfigError::UnknownCallback { name: name.to_owned() })?;
            item.set_action(Some(action));
        }
        Ok(item)
    }

    fn build_pinned(&self, element: &ItemElement) -> Result<(PaneItem<D::Item>, SlotPos)> {
        let position = SlotPos::new(required(element, "x")?, required(element, "y")?);
        Ok((self.build_item(element)?, position))
    }

    fn report<V>(&self, element: &ItemElement, result: Result<V>) -> Option<V> {
        result
            .inspect_err(|err| tracing::warn!(element = %element.name, error = %err, "dropping item"))
            .ok()
    }
}

fn optional<N>(element: &ItemElement, attribute: &str) -> Result<Option<N>>
where
    N: FromStr,
    N::Err: fmt::Display,
{
    element
        .attr(attribute)
        .map(|value| {
            value.trim().parse().map_err(|err: N::Err| ConfigError::InvalidAttribute {
                element: element.name.clone(),
                attribute: attribute.to_owned(),
                value: value.to_owned(),
                reason: err.to_string(),
            })
        })
        .transpose()
}

fn required<N>(element: &ItemElement, attribute: &str) -> Result<N>
where
    N: FromStr,
    N::Err: fmt::Display,
{
    optional(element, attribute)?.ok_or_else(|| ConfigError::missing(&element.name, attribute))
}

fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Booleans are `true` in any case; anything else, or absence, is false.
fn flag(element: &ItemElement, attribute: &str) -> bool {
    element.attr(attribute).is_some_and(is_true)
}
