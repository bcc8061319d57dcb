use indexmap::IndexMap;

/// A single option value supplied by the caller.
///
/// Booleans are never emitted raw: helpers consume boolean-style options and
/// translate them into presence attributes, CSS classes, `data-*` strings or
/// a tag choice. Anything left over is rendered with [`OptValue::render`].
#[derive(Debug, Clone, PartialEq)]
pub enum OptValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl OptValue {
    /// Truthiness used by flag-style options: only `Bool(false)` is falsy.
    pub fn truthy(&self) -> bool {
        !matches!(self, OptValue::Bool(false))
    }

    /// Render the value as an attribute string.
    pub fn render(&self) -> String {
        match self {
            OptValue::Str(s) => s.clone(),
            OptValue::Bool(b) => b.to_string(),
            OptValue::Int(i) => i.to_string(),
        }
    }
}

impl From<&str> for OptValue {
    fn from(s: &str) -> Self {
        OptValue::Str(s.to_string())
    }
}

impl From<String> for OptValue {
    fn from(s: String) -> Self {
        OptValue::Str(s)
    }
}

impl From<bool> for OptValue {
    fn from(b: bool) -> Self {
        OptValue::Bool(b)
    }
}

impl From<i64> for OptValue {
    fn from(i: i64) -> Self {
        OptValue::Int(i)
    }
}

impl From<i32> for OptValue {
    fn from(i: i32) -> Self {
        OptValue::Int(i64::from(i))
    }
}

/// Ordered option map passed to every helper.
///
/// Recognized keys (`theme`, `icon`, flag options, …) are consumed by the
/// helper; everything else passes through verbatim to the emitted attribute
/// map in insertion order. Unknown keys are never an error — pass-through is
/// the extensibility seam.
///
/// ```ignore
/// use mobml::Opts;
///
/// let opts = Opts::new().theme("b").set("data-transition", "pop");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Opts {
    entries: IndexMap<String, OptValue>,
}

impl Opts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any earlier value for the same key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Set a boolean flag option to `true`.
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.set(key, true)
    }

    /// Shorthand for the ubiquitous `theme` option ('a'..'f').
    pub fn theme(self, theme: &str) -> Self {
        self.set("theme", theme)
    }

    /// Merge `overrides` into `self`. Values from `overrides` win; keys
    /// already present keep their position.
    pub fn merge(mut self, overrides: Opts) -> Self {
        for (key, value) in overrides.entries {
            self.entries.insert(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return an option, preserving the order of the rest.
    pub(crate) fn take(&mut self, key: &str) -> Option<OptValue> {
        self.entries.shift_remove(key)
    }

    /// Remove a flag option, returning whether it was present and truthy.
    pub(crate) fn take_truthy(&mut self, key: &str) -> bool {
        self.take(key).map(|v| v.truthy()).unwrap_or(false)
    }

    /// Remove an option and render it as a string.
    pub(crate) fn take_str(&mut self, key: &str) -> Option<String> {
        self.take(key).map(|v| v.render())
    }

    /// Read an option as a string without consuming it.
    pub(crate) fn get_str(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.render())
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, OptValue)> {
        self.entries.into_iter()
    }
}
