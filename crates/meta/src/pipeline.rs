// ABOUTME: Ordered extraction pipeline over an explicit per-document context.
// ABOUTME: Stages share one Article and one Configuration, mutated strictly in sequence.

//! Extraction pipeline.
//!
//! A [`Context`] bundles the read-only document with the mutable article and
//! configuration. [`Pipeline::run`] hands it to each [`Stage`] in order. One
//! context belongs to one worker; the configuration's language default is
//! last-writer-wins, so workers that run in parallel should each own their
//! configuration.

use std::fmt;

use tracing::debug;

use crate::article::Article;
use crate::dom::DocumentQuery;
use crate::extractors::meta::MetaExtractor;
use crate::options::Configuration;

/// Per-document state handed to every stage.
pub struct Context<'a, D> {
    pub doc: &'a D,
    pub article: &'a mut Article,
    pub config: &'a mut Configuration,
}

/// One step of the extraction pipeline.
pub trait Stage<D: DocumentQuery> {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn process(&self, ctx: &mut Context<'_, D>);
}

/// An ordered list of stages.
pub struct Pipeline<D: DocumentQuery> {
    stages: Vec<Box<dyn Stage<D>>>,
}

impl<D: DocumentQuery> Pipeline<D> {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// A pipeline with the metadata stage.
    pub fn with_defaults() -> Self {
        Self::new().stage(MetaExtractor::new())
    }

    /// Append a stage, builder style.
    pub fn stage(mut self, stage: impl Stage<D> + 'static) -> Self {
        self.push(stage);
        self
    }

    /// Append a stage.
    pub fn push(&mut self, stage: impl Stage<D> + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order against one document.
    pub fn run(&self, doc: &D, article: &mut Article, config: &mut Configuration) {
        let mut ctx = Context {
            doc,
            article,
            config,
        };
        for stage in &self.stages {
            debug!(stage = stage.name(), "running stage");
            stage.process(&mut ctx);
        }
    }
}

impl<D: DocumentQuery> Default for Pipeline<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DocumentQuery> fmt::Debug for Pipeline<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.names())
            .finish()
    }
}
