use phasedarray_core::field::{FREQUENCY, LUT_STEPS, N_SOURCES, RP_DIRECTION, RP_TYPE};
use phasedarray_core::{
    corner_bounds, default_stops, preset, AppState, ColorStops, Directivity, FieldUniforms,
    SceneState, UniformSlot, LUT_PRESETS, LUT_WIDTH,
};

fn fresh() -> AppState {
    AppState::from_query(Vec::<(String, String)>::new(), SceneState::new(800, 600))
}

#[test]
fn empty_query_uses_declared_defaults() {
    let s = fresh();
    assert_eq!(s.registry.number(N_SOURCES), Some(30.0));
    assert_eq!(s.registry.number(FREQUENCY), Some(2.0));
    assert_eq!(s.directivity(), Directivity::Cardioid);
    assert_eq!(s.lut_steps(), 5);
    assert_eq!(s.stops(), &default_stops());
}

#[test]
fn query_pre_seeds_declarations_and_lut() {
    let s = AppState::from_query(
        [
            ("frequency", "2.50"),
            ("n_sources", "12.00"),
            ("rp_type", "0.00"),
            ("lut", "ff0000-00ff00"),
            ("unknown", "1"),
        ],
        SceneState::new(10, 10),
    );
    assert_eq!(s.registry.number(FREQUENCY), Some(2.5));
    assert_eq!(s.registry.number(N_SOURCES), Some(12.0));
    assert_eq!(s.directivity(), Directivity::Uniform);
    assert_eq!(s.stops().to_list_string(), "#ff0000,#00ff00");
    assert!(!s.registry.contains("unknown"));
}

#[test]
fn app_state_query_round_trip() {
    let mut a = fresh();
    a.registry.set_number(FREQUENCY, 2.5).unwrap();
    a.select_stops(ColorStops::parse_list("#0000ff,#000000,#ff0000").unwrap());
    let b = AppState::from_query(a.query_pairs(), SceneState::default());
    for p in a.registry.iter() {
        let va = p.value().as_number().unwrap();
        let vb = b.registry.number(p.name()).unwrap();
        assert!((va - vb).abs() <= 0.01, "{}: {va} vs {vb}", p.name());
    }
    assert_eq!(a.stops(), b.stops());
}

#[test]
fn lut_steps_clamps_and_treats_nan_as_continuous() {
    let mut s = fresh();
    s.registry.set_number(LUT_STEPS, 0.0).unwrap();
    assert_eq!(s.lut_steps(), 1);
    s.registry.set_number(LUT_STEPS, 9999.0).unwrap();
    assert_eq!(s.lut_steps(), 256);
    s.registry.set_number(LUT_STEPS, f32::NAN).unwrap();
    assert_eq!(s.lut_steps(), 1);
}

#[test]
fn lut_raster_uses_the_continuous_ramp_for_one_step() {
    let mut s = fresh();
    s.apply_control_input(LUT_STEPS, "1").unwrap();
    let raster = s.lut_raster(LUT_WIDTH, 1);
    assert_eq!(raster.pixel(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(raster.pixel(LUT_WIDTH - 1, 0), Some([255, 0, 0, 255]));
}

#[test]
fn lut_revision_bumps_on_stops_and_steps_only() {
    let mut s = fresh();
    let r0 = s.lut_revision();
    s.apply_control_input(FREQUENCY, "3").unwrap();
    assert_eq!(s.lut_revision(), r0);
    s.apply_control_input(LUT_STEPS, "8").unwrap();
    assert_eq!(s.lut_revision(), r0 + 1);
    let fire = preset("fire").unwrap().stops().unwrap();
    s.select_stops(fire);
    assert_eq!(s.lut_revision(), r0 + 2);
}

#[test]
fn wheel_steers_in_hundredths_of_a_turn() {
    let mut s = fresh();
    s.steer_by_wheel(-120.0).unwrap();
    s.steer_by_wheel(-3.0).unwrap();
    assert!((s.steering_turns() - 0.02).abs() < 1e-6);
    s.steer_by_wheel(40.0).unwrap();
    assert!((s.steering_turns() - 0.01).abs() < 1e-6);
    assert_eq!(s.registry.number(RP_DIRECTION), Some(s.steering_turns()));
}

#[test]
fn click_toggles_between_uniform_and_cardioid() {
    let mut s = fresh();
    assert_eq!(s.toggle_directivity().unwrap(), Directivity::Uniform);
    assert_eq!(s.registry.number(RP_TYPE), Some(0.0));
    assert_eq!(s.toggle_directivity().unwrap(), Directivity::Cardioid);
    assert_eq!(s.registry.number(RP_TYPE), Some(1.0));
}

#[test]
fn polar_view_reflects_params_and_hover() {
    let mut s = fresh();
    s.scene.polar_hover = true;
    s.registry.set_number(RP_DIRECTION, 0.3).unwrap();
    let v = s.polar_view();
    assert!(v.hovered);
    assert_eq!(v.pattern, Directivity::Cardioid);
    assert_eq!(v.steering_turns, 0.3);
}

#[test]
fn field_uniforms_carry_scene_and_slots() {
    let mut s = fresh();
    s.scene.pointer_uv = [0.25, 0.75];
    s.registry.set_number(FREQUENCY, 4.0).unwrap();
    let u = s.field_uniforms(1.5);
    assert_eq!(u.resolution, [800.0, 600.0]);
    assert_eq!(u.mouse, [0.25, 0.75]);
    assert_eq!(u.time, 1.5);
    assert_eq!(u.slot(UniformSlot(0)), Some(30.0));
    assert_eq!(u.slot(UniformSlot(5)), Some(4.0));
    assert_eq!(u.slot(UniformSlot(8)), Some(1.0));
    assert_eq!(u.params[2][0], 1.0);
    assert_eq!(u.slot(UniformSlot(16)), None);
}

#[test]
fn uniform_block_is_96_bytes() {
    assert_eq!(std::mem::size_of::<FieldUniforms>(), 96);
    let u = FieldUniforms::new([1.0, 2.0], [0.0, 0.0], 0.0);
    assert_eq!(bytemuck::bytes_of(&u).len(), 96);
}

#[test]
fn out_of_range_slot_is_ignored() {
    let mut u = FieldUniforms::default();
    u.set_slot(UniformSlot(200), 5.0);
    assert_eq!(u, FieldUniforms::default());
}

#[test]
fn scene_bounds_follow_canvas_size() {
    let mut scene = SceneState::new(800, 600);
    assert_eq!(
        scene.bounds,
        [400.0, 300.0, -400.0, 300.0, 400.0, -300.0, -400.0, -300.0]
    );
    scene.set_canvas_size(100, 50);
    assert_eq!(scene.bounds, corner_bounds(100.0, 50.0));
    assert_eq!(scene.resolution(), [100.0, 50.0]);
}

#[test]
fn every_preset_is_a_valid_ramp() {
    for p in LUT_PRESETS {
        let stops = p.stops().unwrap();
        assert!(stops.len() >= 2, "{}", p.name);
    }
}
