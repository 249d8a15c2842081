//! Named simulation parameters.
//!
//! The registry is the single owner of every tunable value. It knows nothing
//! about the DOM or the GPU: controls are reached through [`ParamControl`] and
//! the renderer's binding target is an opaque, caller-chosen type `L`.
//!
//! Values are tagged ([`ParamValue`]) and the tag is fixed by the first
//! `declare` call; later writes of the other kind are rejected. Values that
//! arrive before their declaration (URL hydration) are held as raw strings
//! and parsed with the declared kind once the name is declared.

use fnv::FnvHashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Text,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f32),
    Text(String),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Number(_) => ParamKind::Number,
            ParamValue::Text(_) => ParamKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            ParamValue::Number(v) => Some(*v),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }

    /// Query-string form: numbers with exactly two decimals, text verbatim.
    pub fn to_query_string(&self) -> String {
        match self {
            ParamValue::Number(v) => format!("{:.2}", v),
            ParamValue::Text(s) => s.clone(),
        }
    }

    /// Parse `raw` as `kind`. A malformed number becomes NaN rather than an
    /// error; an empty string reads as 0.
    pub fn parse_as(kind: ParamKind, raw: &str) -> ParamValue {
        match kind {
            ParamKind::Text => ParamValue::Text(raw.to_string()),
            ParamKind::Number => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return ParamValue::Number(0.0);
                }
                match trimmed.parse::<f32>() {
                    Ok(v) => ParamValue::Number(v),
                    Err(_) => {
                        log::warn!("[params] malformed number {:?}, using NaN", raw);
                        ParamValue::Number(f32::NAN)
                    }
                }
            }
        }
    }
}

/// Control display text (no fixed decimals, unlike the query form).
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(v) => write!(f, "{}", v),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    Unknown(String),
    #[error("parameter `{name}` holds a {expected:?} value")]
    TypeMismatch { name: String, expected: ParamKind },
}

/// A UI element showing a parameter's value.
pub trait ParamControl {
    fn show(&self, text: &str);
}

pub struct Parameter<L> {
    name: String,
    value: ParamValue,
    default: ParamValue,
    control: Option<Box<dyn ParamControl>>,
    location: Option<L>,
}

impl<L> Parameter<L> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    pub fn default_value(&self) -> &ParamValue {
        &self.default
    }

    pub fn location(&self) -> Option<&L> {
        self.location.as_ref()
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    fn refresh_control(&self) {
        if let Some(control) = &self.control {
            control.show(&self.value.to_string());
        }
    }
}

pub struct ParameterRegistry<L = ()> {
    params: Vec<Parameter<L>>,
    index: FnvHashMap<String, usize>,
    // Raw values seen before the matching declare, in arrival order.
    seeds: Vec<(String, String)>,
}

impl<L> Default for ParameterRegistry<L> {
    fn default() -> Self {
        Self {
            params: Vec::new(),
            index: FnvHashMap::default(),
            seeds: Vec::new(),
        }
    }
}

impl<L> ParameterRegistry<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`. A pre-seeded value wins over `default`; declaring an
    /// existing name leaves its value alone and refreshes its control.
    pub fn declare(&mut self, name: &str, default: impl Into<ParamValue>) {
        if let Some(&i) = self.index.get(name) {
            self.params[i].refresh_control();
            return;
        }
        let default = default.into();
        let value = match self.take_seed(name) {
            Some(raw) => ParamValue::parse_as(default.kind(), &raw),
            None => default.clone(),
        };
        self.index.insert(name.to_string(), self.params.len());
        self.params.push(Parameter {
            name: name.to_string(),
            value,
            default,
            control: None,
            location: None,
        });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.param(name).map(|p| &p.value)
    }

    pub fn number(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(ParamValue::as_number)
    }

    pub fn param(&self, name: &str) -> Option<&Parameter<L>> {
        self.index.get(name).map(|&i| &self.params[i])
    }

    /// Write a value and mirror it to the bound control. The URL is not
    /// touched; syncing it is the caller's separate step.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<(), ParamError> {
        let value = value.into();
        let param = self.param_mut(name)?;
        let expected = param.default.kind();
        if value.kind() != expected {
            return Err(ParamError::TypeMismatch {
                name: name.to_string(),
                expected,
            });
        }
        param.value = value;
        param.refresh_control();
        Ok(())
    }

    pub fn set_number(&mut self, name: &str, value: f32) -> Result<(), ParamError> {
        self.set(name, ParamValue::Number(value))
    }

    /// Attach a control and show the current value on it.
    pub fn bind_control(
        &mut self,
        name: &str,
        control: Box<dyn ParamControl>,
    ) -> Result<(), ParamError> {
        let param = self.param_mut(name)?;
        param.control = Some(control);
        param.refresh_control();
        Ok(())
    }

    /// Attach the renderer's binding target for this parameter.
    pub fn bind_location(&mut self, name: &str, location: L) -> Result<(), ParamError> {
        self.param_mut(name)?.location = Some(location);
        Ok(())
    }

    /// A user edit from a bound control: parse `raw` with the declared kind
    /// and store it. The control already shows `raw`, so it is not written
    /// back (that would fight the user's typing).
    pub fn apply_control_input(&mut self, name: &str, raw: &str) -> Result<(), ParamError> {
        let param = self.param_mut(name)?;
        param.value = ParamValue::parse_as(param.default.kind(), raw);
        Ok(())
    }

    /// Store a raw value for `name`. Declared names are parsed and applied
    /// immediately; others wait for their `declare`.
    pub fn seed(&mut self, name: &str, raw: &str) {
        if let Some(&i) = self.index.get(name) {
            let param = &mut self.params[i];
            param.value = ParamValue::parse_as(param.default.kind(), raw);
            param.refresh_control();
            return;
        }
        match self.seeds.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = raw.to_string(),
            None => self.seeds.push((name.to_string(), raw.to_string())),
        }
    }

    /// Seeded keys that no declaration has claimed.
    pub fn pending_seeds(&self) -> impl Iterator<Item = (&str, &str)> {
        self.seeds.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter<L>> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `(location, value)` for every numeric parameter bound to a location.
    pub fn uniforms(&self) -> impl Iterator<Item = (&L, f32)> {
        self.params.iter().filter_map(|p| {
            let location = p.location.as_ref()?;
            let value = p.value.as_number()?;
            Some((location, value))
        })
    }

    fn param_mut(&mut self, name: &str) -> Result<&mut Parameter<L>, ParamError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.params[i]),
            None => Err(ParamError::Unknown(name.to_string())),
        }
    }

    fn take_seed(&mut self, name: &str) -> Option<String> {
        let pos = self.seeds.iter().position(|(k, _)| k == name)?;
        Some(self.seeds.remove(pos).1)
    }
}
