//! Per-run conversion state.

use super::options::ParseOptions;
use super::patterns::Patterns;
use crate::model::{ResourceRegistry, StyleCatalog};
use crate::render::ConversionStats;

/// State owned by one conversion run.
///
/// Holds everything the passes mutate: the resource registry and the
/// monotonically increasing list instance and shape stacking counters.
/// A fresh context is created for every document, so repeated runs in one
/// process never share identifiers.
pub(crate) struct Conversion<'a> {
    pub patterns: &'a Patterns,
    pub options: &'a ParseOptions,
    pub registry: ResourceRegistry,
    pub stats: ConversionStats,
    next_instance: u32,
    next_z_order: u32,
}

impl<'a> Conversion<'a> {
    pub fn new(patterns: &'a Patterns, options: &'a ParseOptions, registry: ResourceRegistry) -> Self {
        Self {
            patterns,
            options,
            registry,
            stats: ConversionStats::default(),
            next_instance: options.list_instance_base,
            next_z_order: 0,
        }
    }

    pub fn styles(&self) -> &'a StyleCatalog {
        let options: &'a ParseOptions = self.options;
        &options.styles
    }

    /// Hand out the next list instance identifier.
    pub fn mint_instance(&mut self) -> u32 {
        let id = self.next_instance;
        self.next_instance = self.next_instance.saturating_add(1);
        id
    }

    /// Hand out the next shape stacking order.
    pub fn next_z_order(&mut self) -> u32 {
        let z = self.next_z_order;
        self.next_z_order = self.next_z_order.saturating_add(1);
        z
    }
}
