//! Flat key/value encoding of [`ScenarioState`]
//!
//! This is the share-link format: every field maps to one short query key.
//! Decoding is deliberately permissive. A missing, empty or unparseable value
//! falls back to the default for that field, and the result is always clamped,
//! so [`decode`] never fails.
//!
//! | key      | field          | parse   | default |
//! |----------|----------------|---------|---------|
//! | `pair`   | `pair_id`      | string  | [`DEFAULT_PAIR_ID`](crate::model::DEFAULT_PAIR_ID) |
//! | `km`     | `annual_km`    | integer | 15000   |
//! | `home`   | `home_share`   | integer | 80      |
//! | `eh`     | `home_price`   | float   | 30      |
//! | `ep`     | `public_price` | float   | 55      |
//! | `petrol` | `petrol`       | float   | 1.85    |
//! | `loss`   | `losses`       | float   | 10      |
//! | `maint`  | `maint`        | float   | 150     |
//! | `rw`     | `real_world`   | boolean | false   |

mod query;

use std::collections::BTreeMap;

use crate::model::{PairId, ScenarioState};

pub use query::{parse_query, percent_decode, percent_encode, to_query};

/// Flat parameter mapping as found in a query string
pub type Params = BTreeMap<String, String>;

pub const KEY_PAIR: &str = "pair";
pub const KEY_ANNUAL_KM: &str = "km";
pub const KEY_HOME_SHARE: &str = "home";
pub const KEY_HOME_PRICE: &str = "eh";
pub const KEY_PUBLIC_PRICE: &str = "ep";
pub const KEY_PETROL: &str = "petrol";
pub const KEY_LOSSES: &str = "loss";
pub const KEY_MAINT: &str = "maint";
pub const KEY_REAL_WORLD: &str = "rw";

/// Recognized keys in share-link order
pub const KEYS: [&str; 9] = [
    KEY_PAIR,
    KEY_ANNUAL_KM,
    KEY_HOME_SHARE,
    KEY_HOME_PRICE,
    KEY_PUBLIC_PRICE,
    KEY_PETROL,
    KEY_LOSSES,
    KEY_MAINT,
    KEY_REAL_WORLD,
];

/// Total parse combinator: the parsed value, or `default` when the raw value
/// is absent, blank, or rejected by `parse`.
pub fn parse_or<T>(raw: Option<&str>, default: T, parse: impl FnOnce(&str) -> Option<T>) -> T {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(parse)
        .unwrap_or(default)
}

/// Finite floating point value
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole number, accepting decimal text and truncating toward zero.
/// Negative values saturate to zero; clamping happens afterwards.
pub fn parse_whole(raw: &str) -> Option<u32> {
    parse_float(raw).map(|v| v.trunc() as u32)
}

/// `1`, `true`, `yes` and `on` (any case) are true; every other token is false
pub fn parse_flag(raw: &str) -> Option<bool> {
    Some(matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    ))
}

/// Build a clamped [`ScenarioState`] from flat parameters.
///
/// Unknown keys are ignored. The pair id is copied verbatim, surrounding
/// whitespace included; resolving it against the catalog is left to the caller.
pub fn decode(params: &Params, defaults: &ScenarioState) -> ScenarioState {
    let get = |key: &str| params.get(key).map(String::as_str);

    ScenarioState {
        pair_id: get(KEY_PAIR)
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| defaults.pair_id.clone(), PairId::from),
        annual_km: parse_or(get(KEY_ANNUAL_KM), defaults.annual_km, parse_whole),
        home_share: parse_or(get(KEY_HOME_SHARE), defaults.home_share, parse_whole),
        home_price: parse_or(get(KEY_HOME_PRICE), defaults.home_price, parse_float),
        public_price: parse_or(get(KEY_PUBLIC_PRICE), defaults.public_price, parse_float),
        petrol: parse_or(get(KEY_PETROL), defaults.petrol, parse_float),
        losses: parse_or(get(KEY_LOSSES), defaults.losses, parse_float),
        maint: parse_or(get(KEY_MAINT), defaults.maint, parse_float),
        real_world: parse_or(get(KEY_REAL_WORLD), defaults.real_world, parse_flag),
    }
    .clamped()
}

/// Flatten a state with fixed per-field precision.
///
/// Distance, share and servicing are whole numbers, electricity prices and
/// losses carry one decimal, petrol two.
pub fn encode(state: &ScenarioState) -> Params {
    let mut params = Params::new();
    params.insert(KEY_PAIR.into(), state.pair_id.to_string());
    params.insert(KEY_ANNUAL_KM.into(), state.annual_km.to_string());
    params.insert(KEY_HOME_SHARE.into(), state.home_share.to_string());
    params.insert(KEY_HOME_PRICE.into(), format!("{:.1}", state.home_price));
    params.insert(KEY_PUBLIC_PRICE.into(), format!("{:.1}", state.public_price));
    params.insert(KEY_PETROL.into(), format!("{:.2}", state.petrol));
    params.insert(KEY_LOSSES.into(), format!("{:.1}", state.losses));
    params.insert(KEY_MAINT.into(), format!("{:.0}", state.maint));
    params.insert(
        KEY_REAL_WORLD.into(),
        if state.real_world { "1" } else { "0" }.into(),
    );
    params
}

/// Query string for a state, keys in share-link order
pub fn encode_query(state: &ScenarioState) -> String {
    let params = encode(state);
    to_query(
        KEYS.iter()
            .filter_map(|&key| params.get(key).map(|value| (key, value.as_str()))),
    )
}

/// Shareable URL for a state. Any query already on `base` is replaced.
pub fn share_url(base: &str, state: &ScenarioState) -> String {
    let base = base.split_once('?').map_or(base, |(path, _)| path);
    format!("{base}?{}", encode_query(state))
}

/// Decode a state straight from a query string or full URL
pub fn decode_query(query: &str, defaults: &ScenarioState) -> ScenarioState {
    decode(&parse_query(query), defaults)
}
