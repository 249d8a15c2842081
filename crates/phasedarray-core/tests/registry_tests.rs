use phasedarray_core::field::{declare_field_params, FIELD_PARAMS, FREQUENCY, LUT_STEPS, N_SOURCES};
use phasedarray_core::{
    to_query_string, ColorStops, ParamControl, ParamError, ParamKind, ParamValue,
    ParameterRegistry, UniformSlot, LUT_KEY,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Control double recording every displayed string.
#[derive(Clone, Default)]
struct FakeInput(Rc<RefCell<Vec<String>>>);

impl FakeInput {
    fn shown(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
    fn last(&self) -> Option<String> {
        self.0.borrow().last().cloned()
    }
}

impl ParamControl for FakeInput {
    fn show(&self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

fn stops(list: &str) -> ColorStops {
    ColorStops::parse_list(list).unwrap()
}

#[test]
fn declare_uses_default_when_not_seeded() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("frequency", 2.0);
    assert_eq!(reg.number("frequency"), Some(2.0));
    assert_eq!(reg.len(), 1);
}

#[test]
fn redeclare_keeps_value_set_earlier() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("frequency", 2.0);
    reg.set("frequency", 5.0).unwrap();
    reg.declare("frequency", 2.0);
    reg.declare("frequency", 2.0);
    assert_eq!(reg.number("frequency"), Some(5.0));
    assert_eq!(reg.len(), 1);
}

#[test]
fn seeded_value_wins_over_default() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.seed("power", "250.00");
    reg.declare("power", 500.0);
    assert_eq!(reg.number("power"), Some(250.0));
    assert_eq!(reg.pending_seeds().count(), 0);
}

#[test]
fn seed_is_parsed_with_the_declared_kind() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.seed("label", "12");
    reg.declare("label", "default");
    assert_eq!(reg.get("label"), Some(&ParamValue::Text("12".into())));
}

#[test]
fn set_rejects_kind_changes_and_unknown_names() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("frequency", 2.0);
    assert_eq!(
        reg.set("frequency", "fast"),
        Err(ParamError::TypeMismatch {
            name: "frequency".into(),
            expected: ParamKind::Number,
        })
    );
    assert_eq!(reg.number("frequency"), Some(2.0));
    assert_eq!(
        reg.set("nope", 1.0),
        Err(ParamError::Unknown("nope".into()))
    );
}

#[test]
fn bound_control_shows_current_value_and_follows_set() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.seed("n_sources", "12");
    reg.declare("n_sources", 30.0);
    let input = FakeInput::default();
    reg.bind_control("n_sources", Box::new(input.clone())).unwrap();
    assert_eq!(input.last().as_deref(), Some("12"));
    reg.set("n_sources", 8.0).unwrap();
    assert_eq!(input.shown(), vec!["12".to_string(), "8".to_string()]);
}

#[test]
fn redeclare_refreshes_bound_control() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("k_noise", 0.04);
    let input = FakeInput::default();
    reg.bind_control("k_noise", Box::new(input.clone())).unwrap();
    reg.declare("k_noise", 0.5);
    assert_eq!(input.shown(), vec!["0.04".to_string(), "0.04".to_string()]);
}

#[test]
fn control_input_is_parsed_and_applied() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("attenuation", 0.0);
    reg.apply_control_input("attenuation", "0.25").unwrap();
    assert_eq!(reg.number("attenuation"), Some(0.25));
    reg.apply_control_input("attenuation", "oops").unwrap();
    assert!(reg.number("attenuation").unwrap().is_nan());
    assert!(reg.apply_control_input("missing", "1").is_err());
}

#[test]
fn control_input_is_not_echoed_back_to_the_control() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("power", 500.0);
    let input = FakeInput::default();
    reg.bind_control("power", Box::new(input.clone())).unwrap();
    reg.apply_control_input("power", "25.").unwrap();
    assert_eq!(reg.number("power"), Some(25.0));
    assert_eq!(input.shown(), vec!["500".to_string()]);
}

#[test]
fn set_does_not_change_serialized_query_of_other_params() {
    let mut reg: ParameterRegistry<UniformSlot> = ParameterRegistry::new();
    declare_field_params(&mut reg);
    let lut = stops("#0000ff,#000000,#ff0000");
    let before = reg.serialize_to_query(&lut);
    reg.set_number(FREQUENCY, 3.0).unwrap();
    let after = reg.serialize_to_query(&lut);
    let changed: Vec<_> = before
        .iter()
        .zip(after.iter())
        .filter(|(a, b)| a != b)
        .map(|(a, _)| a.0.clone())
        .collect();
    assert_eq!(changed, vec![FREQUENCY.to_string()]);
}

#[test]
fn query_lists_params_in_declaration_order_then_lut() {
    let mut reg: ParameterRegistry<UniformSlot> = ParameterRegistry::new();
    declare_field_params(&mut reg);
    let pairs = reg.serialize_to_query(&stops("#0000ff,#000000,#ff0000"));
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    let mut expected: Vec<&str> = FIELD_PARAMS.iter().map(|d| d.name).collect();
    expected.push(LUT_KEY);
    assert_eq!(keys, expected);
    assert_eq!(pairs[0], ("n_sources".to_string(), "30.00".to_string()));
    assert_eq!(
        pairs.last().unwrap(),
        &("lut".to_string(), "0000ff-000000-ff0000".to_string())
    );
}

#[test]
fn text_params_pass_through_verbatim() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("mode", "a b/c");
    let pairs = reg.serialize_to_query(&stops("#000000,#ffffff"));
    assert_eq!(pairs[0], ("mode".to_string(), "a b/c".to_string()));
}

#[test]
fn registry_entry_named_lut_is_never_serialized() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("lut", "stale");
    let pairs = reg.serialize_to_query(&stops("#ff0000,#00ff00"));
    assert_eq!(pairs, vec![("lut".to_string(), "ff0000-00ff00".to_string())]);
}

#[test]
fn url_round_trip_restores_values_and_stops() {
    let lut = stops("#0000ff,#000000,#ff0000");
    let mut src: ParameterRegistry = ParameterRegistry::new();
    src.declare("frequency", 2.0);
    src.declare("n_sources", 30.0);
    src.set("frequency", 2.5).unwrap();
    let pairs = src.serialize_to_query(&lut);
    assert_eq!(
        to_query_string(&pairs),
        "frequency=2.50&n_sources=30.00&lut=0000ff-000000-ff0000"
    );

    let mut dst: ParameterRegistry = ParameterRegistry::new();
    let hydrated = dst.hydrate_from_query(pairs.iter().map(|(k, v)| (k, v)));
    dst.declare("frequency", 2.0);
    dst.declare("n_sources", 30.0);
    assert!((dst.number("frequency").unwrap() - 2.5).abs() <= 0.01);
    assert!((dst.number("n_sources").unwrap() - 30.0).abs() <= 0.01);
    assert_eq!(hydrated.stops, Some(lut));
    assert_eq!(hydrated.seeded, 2);
}

#[test]
fn two_decimal_rounding_is_within_a_hundredth() {
    let mut src: ParameterRegistry = ParameterRegistry::new();
    src.declare("k_alpha", 0.01234);
    let pairs = src.serialize_to_query(&stops("#000000,#ffffff"));
    let mut dst: ParameterRegistry = ParameterRegistry::new();
    dst.hydrate_from_query(pairs);
    dst.declare("k_alpha", 0.0);
    assert!((dst.number("k_alpha").unwrap() - 0.01234).abs() <= 0.01);
}

#[test]
fn hydrate_after_declare_applies_immediately() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.declare("frequency", 2.0);
    let input = FakeInput::default();
    reg.bind_control("frequency", Box::new(input.clone())).unwrap();
    reg.hydrate_from_query([("frequency", "4.00")]);
    assert_eq!(reg.number("frequency"), Some(4.0));
    assert_eq!(input.last().as_deref(), Some("4"));
}

#[test]
fn malformed_number_in_query_becomes_nan() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    reg.hydrate_from_query([("power", "lots")]);
    reg.declare("power", 500.0);
    assert!(reg.number("power").unwrap().is_nan());
}

#[test]
fn unknown_keys_are_retained_but_not_applied() {
    let mut reg: ParameterRegistry<UniformSlot> = ParameterRegistry::new();
    reg.hydrate_from_query([("zoom", "3"), (N_SOURCES, "10")]);
    declare_field_params(&mut reg);
    assert_eq!(reg.number(N_SOURCES), Some(10.0));
    assert!(!reg.contains("zoom"));
    let pending: Vec<_> = reg.pending_seeds().collect();
    assert_eq!(pending, vec![("zoom", "3")]);
    let keys: Vec<String> = reg
        .serialize_to_query(&stops("#000000,#ffffff"))
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert!(!keys.contains(&"zoom".to_string()));
}

#[test]
fn malformed_lut_is_ignored() {
    let mut reg: ParameterRegistry = ParameterRegistry::new();
    assert_eq!(reg.hydrate_from_query([("lut", "ff0000")]).stops, None);
    assert_eq!(reg.hydrate_from_query([("lut", "ff0000-zz0000")]).stops, None);
    assert_eq!(reg.hydrate_from_query([("lut", "")]).stops, None);
    assert!(!reg.contains("lut"));
}

#[test]
fn lut_query_codec_round_trips() {
    for list in ["#ff0000,#00ff00", "#0000ff,#000000,#ff0000", "#012345,#6789ab,#cdef01,#ffffff"] {
        let s = stops(list);
        let encoded = s.encode_query();
        assert!(!encoded.contains('#'));
        assert!(!encoded.contains(','));
        let decoded = ColorStops::decode_query(&encoded).unwrap();
        assert_eq!(decoded, s);
        assert_eq!(decoded.to_list_string(), list);
    }
}

#[test]
fn uniforms_skip_params_without_location() {
    let mut reg: ParameterRegistry<UniformSlot> = ParameterRegistry::new();
    declare_field_params(&mut reg);
    let located: Vec<(UniformSlot, f32)> = reg.uniforms().map(|(s, v)| (*s, v)).collect();
    assert_eq!(located.len(), FIELD_PARAMS.len() - 1);
    assert!(reg.param(LUT_STEPS).unwrap().location().is_none());
    assert_eq!(located[0], (UniformSlot(0), 30.0));
}
