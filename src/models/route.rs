use crate::utils::error::{LocaleError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the route parameter that carries the locale
pub const LOCALE_PARAM: &str = "locale";

/// A single route parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteParam {
    Int(i64),
    Str(String),
}

impl RouteParam {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for RouteParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RouteParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RouteParam {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for RouteParam {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RouteParam {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Navigation target
///
/// The locale lives in its own field rather than in `params`, so a route can
/// never carry two disagreeing locale values. It stays a raw string because
/// the router must be able to represent (and then reject) unsupported or
/// malformed locales coming from a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoute")]
pub struct Route {
    /// Named route, if navigating by name
    #[serde(default)]
    pub name: Option<String>,

    /// Path below the locale segment, e.g. `"products/7"`
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    locale: Option<String>,

    #[serde(default)]
    params: BTreeMap<String, RouteParam>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Build a route from a raw parameter mapping
    ///
    /// A `locale` entry is moved into the dedicated field and must be a string.
    pub fn from_params(
        name: Option<String>,
        params: BTreeMap<String, RouteParam>,
    ) -> Result<Self> {
        let mut route = Self {
            name,
            ..Self::default()
        };
        for (key, value) in params {
            route.insert_param(key, value)?;
        }
        Ok(route)
    }

    fn insert_param(&mut self, key: String, value: RouteParam) -> Result<()> {
        if key != LOCALE_PARAM {
            self.params.insert(key, value);
            return Ok(());
        }

        match value {
            RouteParam::Str(s) => {
                self.locale = Some(s);
                Ok(())
            }
            other => Err(LocaleError::InvalidRoute(format!(
                "locale parameter must be a string, got {}",
                other
            ))),
        }
    }

    /// Parse a `/{locale}/{rest}` path
    pub fn from_path(path: &str) -> Result<Self> {
        if !path.starts_with('/') {
            return Err(LocaleError::InvalidRoute(format!(
                "path must start with '/': {}",
                path
            )));
        }

        let trimmed = path.trim_start_matches('/');
        let (locale, rest) = match trimmed.split_once('/') {
            Some((locale, rest)) => (locale, rest),
            None => (trimmed, ""),
        };

        Ok(Self {
            name: None,
            path: (!rest.is_empty()).then(|| rest.trim_end_matches('/').to_string()),
            locale: (!locale.is_empty()).then(|| locale.to_string()),
            params: BTreeMap::new(),
        })
    }

    /// Render as `/{locale}/{rest}`
    pub fn to_path(&self) -> String {
        let mut out = String::from("/");
        if let Some(locale) = &self.locale {
            out.push_str(locale);
        }
        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            if self.locale.is_some() {
                out.push('/');
            }
            out.push_str(path);
        }
        out
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Add a parameter; a `locale` key goes to the locale field and must be a string
    pub fn with_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<RouteParam>,
    ) -> Result<Self> {
        self.insert_param(key.into(), value.into())?;
        Ok(self)
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    pub fn param(&self, key: &str) -> Option<&RouteParam> {
        self.params.get(key)
    }

    /// Parameters other than the locale
    pub fn params(&self) -> &BTreeMap<String, RouteParam> {
        &self.params
    }

    /// Full parameter mapping as a router sees it, locale included
    pub fn all_params(&self) -> BTreeMap<String, RouteParam> {
        let mut all = self.params.clone();
        if let Some(locale) = &self.locale {
            all.insert(LOCALE_PARAM.to_string(), RouteParam::Str(locale.clone()));
        }
        all
    }
}

/// Wire shape of a route, before the locale is pulled out of `params`
#[derive(Deserialize)]
struct RawRoute {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    params: BTreeMap<String, RouteParam>,
}

impl TryFrom<RawRoute> for Route {
    type Error = LocaleError;

    fn try_from(raw: RawRoute) -> Result<Self> {
        let mut route = Route::from_params(raw.name, raw.params)?;
        route.path = raw.path;

        if let Some(locale) = raw.locale {
            if route.locale.as_deref().is_some_and(|l| l != locale) {
                return Err(LocaleError::InvalidRoute(format!(
                    "conflicting locale values {:?} and {:?}",
                    locale,
                    route.locale.as_deref().unwrap_or_default()
                )));
            }
            route.locale = Some(locale);
        }
        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.to_path()),
            None => f.write_str(&self.to_path()),
        }
    }
}
