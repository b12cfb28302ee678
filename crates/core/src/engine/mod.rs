//! The per-document engine.
//!
//! An [`Engine`] owns one document buffer together with the registries and
//! counters that give its fragments meaning. Every mutation is synchronous;
//! rendering to source text reads a snapshot and never touches the buffer.

mod generators;
mod push;
mod styling;

use crate::buffer::{DocumentBuffer, Partition};
use crate::counter::{CounterSet, ENUM_COUNTER, ENUM_HEAD_COUNTER};
use crate::error::EngineError;
use crate::options::DocumentOptions;
use crate::preamble;
use texloom_style::{
    ColourEntry, ColourRegistry, MacroEntry, MacroRegistry, StyleEntry, StyleRegistry, colours,
    styles,
};
use texloom_types::{ColourModel, Fragment};

/// The built-in colours, as `(name, HTML value)`.
const DEFAULT_COLOURS: [(&str, &str); 5] = [
    (colours::TEXT, "000000"),
    (colours::NEW, "0000AA"),
    (colours::OLD, "AA0000"),
    (colours::EQ, "5533AA"),
    (colours::NEQ, "337711"),
];

/// The built-in text styles, as `(name, prefix, suffix)`.
const DEFAULT_STYLES: [(&str, &str, &str); 4] = [
    (styles::BOLD, "\\textbf{", "}"),
    (styles::ITALIC, "\\emph{", "}"),
    (styles::UNDERLINE, "\\ul{", "}"),
    (styles::STRIKEOUT, "\\st{", "}"),
];

/// Where a document is in its render lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
    /// Preambles installed; content may be pushed.
    Initialized,
    /// A render has taken its snapshot and is waiting on the compiler.
    Rendering,
    Rendered,
    /// The last render failed. The buffer is intact and may be rendered again.
    Failed,
}

/// Assembles one LaTeX document.
#[derive(Debug, Clone)]
pub struct Engine {
    options: DocumentOptions,
    buffer: DocumentBuffer,
    colours: ColourRegistry,
    styles: StyleRegistry,
    macros: MacroRegistry,
    counters: CounterSet,
    state: RenderState,
}

impl Engine {
    /// Creates an engine and lays down the preambles for `options`.
    pub fn new(options: DocumentOptions) -> Result<Self, EngineError> {
        let mut engine = Self {
            options: DocumentOptions::default(),
            buffer: DocumentBuffer::new(),
            colours: ColourRegistry::new(),
            styles: StyleRegistry::new(),
            macros: MacroRegistry::new(),
            counters: CounterSet::new(),
            state: RenderState::Initialized,
        };
        engine.init(options)?;
        Ok(engine)
    }

    /// Starts a new document, discarding all content, registrations and
    /// counters. On error the current document is left as it was.
    pub fn init(&mut self, options: DocumentOptions) -> Result<(), EngineError> {
        if let Some(mark) = &options.watermark {
            mark.validate()?;
        }
        let overrides = options
            .colours
            .iter()
            .map(|c| ColourEntry::new(c.name.as_str(), &c.value, c.model))
            .collect::<Result<Vec<_>, _>>()?;

        self.buffer.clear();
        self.colours.clear();
        self.styles.clear();
        self.macros.clear();
        self.counters.clear();

        for fragment in preamble::system(&options) {
            self.buffer.append(Partition::System, fragment);
        }
        self.buffer.append(Partition::Macros, preamble::list_macros());

        for name in [ENUM_COUNTER, ENUM_HEAD_COUNTER] {
            if let Some(definition) = self.counters.declare(name)? {
                self.buffer.append(Partition::Macros, definition);
            }
        }
        for (name, prefix, suffix) in DEFAULT_STYLES {
            let definition = self.styles.add(StyleEntry::new(name, prefix, suffix)?);
            self.buffer.append(Partition::Macros, definition);
        }
        for (name, value) in DEFAULT_COLOURS {
            let definition = self.colours.add(ColourEntry::new(name, value, ColourModel::Html)?);
            self.buffer.append(Partition::Macros, definition);
        }
        for entry in overrides {
            let definition = self.colours.add(entry);
            self.buffer.append(Partition::Macros, definition);
        }

        for fragment in &options.body {
            self.buffer.append(Partition::Body, fragment.clone());
        }

        log::debug!(
            "Initialised document: {} system, {} macro, {} body fragment(s), export={}",
            self.buffer.len(Partition::System),
            self.buffer.len(Partition::Macros),
            self.buffer.len(Partition::Body),
            options.export
        );
        self.options = options;
        self.state = RenderState::Initialized;
        Ok(())
    }

    /// Starts over with the options this document was created with.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.init(self.options.clone())
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    pub fn buffer(&self) -> &DocumentBuffer {
        &self.buffer
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn colours(&self) -> &ColourRegistry {
        &self.colours
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn macros(&self) -> &MacroRegistry {
        &self.macros
    }

    pub fn counters(&self) -> &CounterSet {
        &self.counters
    }

    /// Opens the document body.
    pub fn begin(&mut self) {
        self.buffer
            .append(Partition::Body, crate::templates::begin_document());
    }

    /// Closes the document body.
    pub fn end(&mut self) {
        self.buffer
            .append(Partition::Body, crate::templates::end_document());
    }

    /// Registers a colour and appends its `\definecolor` to the macros.
    pub fn add_colour(
        &mut self,
        name: &str,
        value: &str,
        model: ColourModel,
    ) -> Result<(), EngineError> {
        let definition = self.colours.add(ColourEntry::new(name, value, model)?);
        self.buffer.append(Partition::Macros, definition);
        Ok(())
    }

    /// Registers a style `\style<name>` wrapping its argument in `prefix` and
    /// `suffix`.
    pub fn add_style(&mut self, name: &str, prefix: &str, suffix: &str) -> Result<(), EngineError> {
        let definition = self.styles.add(StyleEntry::new(name, prefix, suffix)?);
        self.buffer.append(Partition::Macros, definition);
        Ok(())
    }

    /// Registers `\name` taking `arity` arguments referenced as `#1`..`#9`.
    pub fn add_macro(&mut self, name: &str, arity: u8, body: &str) -> Result<(), EngineError> {
        let definition = self.macros.add(MacroEntry::new(name, arity, body)?);
        self.buffer.append(Partition::Macros, definition);
        Ok(())
    }

    /// Declares a counter. Declaring an existing counter is a no-op.
    pub fn add_counter(&mut self, name: &str) -> Result<(), EngineError> {
        if let Some(definition) = self.counters.declare(name)? {
            self.buffer.append(Partition::Macros, definition);
        }
        Ok(())
    }

    /// The colour switch for `name`.
    pub fn colour(&self, name: &str) -> Result<Fragment, EngineError> {
        Ok(self.colours.get(name)?.render())
    }

    /// `text` wrapped in the style `name`.
    pub fn style(&self, name: &str, text: &str) -> Result<Fragment, EngineError> {
        Ok(self.styles.get(name)?.render(text))
    }

    /// An invocation of macro `name` with `args`.
    pub fn macro_call<S: AsRef<str>>(&self, name: &str, args: &[S]) -> Result<Fragment, EngineError> {
        Ok(self.macros.get(name)?.call(args)?)
    }

    /// Advances counter `name`, returning the step fragment without
    /// appending it.
    pub fn step_counter(&mut self, name: &str) -> Result<Fragment, EngineError> {
        Ok(self.counters.step(name)?)
    }

    /// The assembled document: `system`, `macros` and `body` joined with
    /// newlines.
    pub fn to_source_text(&self) -> String {
        self.buffer.render()
    }

    /// Marks a render as in flight and returns the snapshot it compiles.
    pub fn start_render(&mut self) -> String {
        self.state = RenderState::Rendering;
        self.to_source_text()
    }

    pub fn complete_render(&mut self, success: bool) {
        self.state = if success {
            RenderState::Rendered
        } else {
            RenderState::Failed
        };
    }
}
