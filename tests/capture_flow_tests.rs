//! Integrationstests für den Erfassungs-Flow über den AppController:
//! - Zeigerspur → Vereinfachung → Validierung → Commit
//! - Abbruchpfade (Deaktivierung, Escape, ungültige Geometrie, Dialog-Abbruch)
//! - Persistenz der Toleranz

use freehand_edit::core::Projection;
use freehand_edit::{
    AbandonReason, AppCommand, AppController, AppIntent, AppState, BuiltinCrsRegistry,
    CaptureError, CaptureKey, CaptureOutcome, Crs, CrsRegistry, FeatureDraft, FeatureHost,
    FreehandOptions, FreehandTool, GeometryDefect, GeometryKind, LayerInfo, PointerSample,
    RawGeometry, ValidityPrompt,
};
use glam::{DVec2, Vec2};

/// Host-Attrappe, die jeden Aufruf in Reihenfolge mitschreibt.
#[derive(Default)]
struct RecordingHost {
    accept_invalid: bool,
    accept_form: bool,
    fail_add: bool,
    calls: Vec<&'static str>,
    labels: Vec<String>,
    added: Vec<FeatureDraft>,
    defects: Vec<GeometryDefect>,
    tool_locked_during_form: Option<bool>,
}

impl ValidityPrompt for RecordingHost {
    fn confirm_invalid_geometry(&mut self, defects: &[GeometryDefect]) -> bool {
        self.calls.push("confirm_invalid_geometry");
        self.defects.extend_from_slice(defects);
        self.accept_invalid
    }
}

impl FeatureHost for RecordingHost {
    fn edit_attributes(&mut self, _draft: &mut FeatureDraft, tool: &mut FreehandTool) -> bool {
        self.calls.push("edit_attributes");
        self.tool_locked_during_form = Some(tool.ignores_clicks());
        self.accept_form
    }

    fn begin_edit_command(&mut self, label: &str) {
        self.calls.push("begin_edit_command");
        self.labels.push(label.to_string());
    }

    fn add_feature(&mut self, draft: FeatureDraft) -> anyhow::Result<()> {
        self.calls.push("add_feature");
        if self.fail_add {
            anyhow::bail!("Layer ist schreibgeschützt");
        }
        self.added.push(draft);
        Ok(())
    }

    fn end_edit_command(&mut self) {
        self.calls.push("end_edit_command");
    }

    fn destroy_edit_command(&mut self) {
        self.calls.push("destroy_edit_command");
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample mit 10 Pixeln pro Karteneinheit, damit der Pixel-Mindestabstand greift.
fn sample(x: f64, y: f64) -> PointerSample {
    PointerSample::new(
        DVec2::new(x, y),
        Vec2::new((x * 10.0) as f32, (y * 10.0) as f32),
    )
}

fn layer(kind: GeometryKind, crs: Crs) -> LayerInfo {
    LayerInfo::new("wege", kind, true, 2, crs)
}

struct Fixture {
    controller: AppController,
    state: AppState,
    host: RecordingHost,
}

impl Fixture {
    fn new(layer: LayerInfo) -> Self {
        init_logging();
        let mut fixture = Self {
            controller: AppController::new(),
            state: AppState::new(),
            host: RecordingHost::default(),
        };
        let canvas = layer.crs;
        fixture.send(AppIntent::CanvasCrsChanged { crs: canvas });
        fixture.send(AppIntent::CurrentLayerChanged { layer: Some(layer) });
        fixture.send(AppIntent::FreehandToolRequested);
        fixture
    }

    fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, &mut self.host, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn try_send(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller
            .handle_intent(&mut self.state, &mut self.host, intent)
    }

    fn press_and_move(&mut self, points: &[(f64, f64)]) {
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            self.send(AppIntent::PointerPressed {
                sample: sample(x, y),
            });
        }
        for &(x, y) in iter {
            self.send(AppIntent::PointerMoved {
                sample: sample(x, y),
            });
        }
    }

    /// Zeichnet `points` als eine Spur: drücken, bewegen, am letzten Punkt loslassen.
    fn trace(&mut self, points: &[(f64, f64)]) {
        let Some((&(lx, ly), head)) = points.split_last() else {
            return;
        };
        self.press_and_move(head);
        self.send(AppIntent::PointerReleased {
            sample: sample(lx, ly),
        });
    }
}

const WOBBLY: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 0.05), (2.0, -0.04), (3.0, 0.0)];
const CROSSING: [(f64, f64); 4] = [(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];

#[test]
fn test_wobbly_trace_is_simplified_and_committed() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.send(AppIntent::ToleranceChanged { value: 0.1 });
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    fx.trace(&WOBBLY);

    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::Committed));
    assert_eq!(fx.host.added.len(), 1);
    let geometry = fx.host.added[0].geometry();
    assert!(geometry.is_valid());
    assert_eq!(
        geometry.geometry(),
        &RawGeometry::LineString(vec![DVec2::new(0.0, 0.0), DVec2::new(3.0, 0.0)])
    );
    assert_eq!(fx.host.added[0].attributes.len(), 2);
    assert_eq!(
        fx.host.calls,
        vec!["begin_edit_command", "add_feature", "end_edit_command"]
    );
    assert_eq!(fx.host.labels, vec!["Feature added".to_string()]);
}

#[test]
fn test_zero_tolerance_keeps_all_vertices() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    fx.trace(&WOBBLY);

    assert_eq!(fx.host.added.len(), 1);
    assert_eq!(fx.host.added[0].geometry().geometry().vertex_count(), 4);
}

#[test]
fn test_geographic_layer_ignores_configured_tolerance() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WGS84));
    fx.send(AppIntent::ToleranceChanged { value: 2.0 });
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    assert!(!fx.state.tolerance_editable());
    assert_eq!(fx.state.options.tolerance, 2.0);

    fx.trace(&WOBBLY);

    assert_eq!(fx.host.added.len(), 1);
    assert_eq!(fx.host.added[0].geometry().geometry().vertex_count(), 4);
}

#[test]
fn test_rejected_invalid_geometry_touches_nothing() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    fx.trace(&CROSSING);

    assert_eq!(
        fx.state.last_outcome,
        Some(CaptureOutcome::Abandoned(
            AbandonReason::InvalidGeometryRejected
        ))
    );
    assert_eq!(fx.host.calls, vec!["confirm_invalid_geometry"]);
    assert!(fx
        .host
        .defects
        .iter()
        .any(|d| matches!(d, GeometryDefect::SelfIntersection { .. })));
    assert!(fx.host.added.is_empty());
}

#[test]
fn test_accepted_invalid_geometry_is_committed_as_invalid() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.host.accept_invalid = true;
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    fx.trace(&CROSSING);

    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::Committed));
    assert!(!fx.host.added[0].geometry().is_valid());
}

#[test]
fn test_tool_switch_mid_capture_discards_buffer() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.press_and_move(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert_eq!(fx.state.tool.vertex_count(), 3);

    fx.send(AppIntent::MapToolChanged);

    assert!(!fx.state.tool_active);
    assert!(!fx.state.tool.is_capturing());
    assert_eq!(fx.state.tool.vertex_count(), 0);
    assert_eq!(
        fx.state.last_outcome,
        Some(CaptureOutcome::Abandoned(AbandonReason::ToolDeactivated))
    );
    assert!(fx.host.calls.is_empty());

    // Loslassen nach der Deaktivierung erzeugt kein Feature
    fx.send(AppIntent::PointerReleased {
        sample: sample(3.0, 0.0),
    });
    assert!(fx.host.calls.is_empty());
}

#[test]
fn test_escape_cancels_capture() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.press_and_move(&[(0.0, 0.0), (1.0, 0.0)]);

    fx.send(AppIntent::KeyPressed {
        key: CaptureKey::Escape,
    });

    assert_eq!(
        fx.state.last_outcome,
        Some(CaptureOutcome::Abandoned(AbandonReason::Cancelled))
    );
    assert!(fx.state.tool_active);
    assert!(fx.host.calls.is_empty());
}

#[test]
fn test_enter_finishes_capture_without_release() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });
    fx.press_and_move(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)]);

    fx.send(AppIntent::KeyPressed {
        key: CaptureKey::Enter,
    });

    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::Committed));
    assert_eq!(fx.host.added[0].geometry().geometry().vertex_count(), 3);
}

#[test]
fn test_click_without_drag_is_silently_abandoned() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));

    fx.trace(&[(0.0, 0.0), (0.05, 0.0)]);

    assert_eq!(
        fx.state.last_outcome,
        Some(CaptureOutcome::Abandoned(AbandonReason::EmptyCapture {
            points: 1
        }))
    );
    assert!(fx.host.calls.is_empty());
}

#[test]
fn test_polygon_layer_commits_ring() {
    let mut fx = Fixture::new(layer(GeometryKind::Polygon, Crs::WEB_MERCATOR));
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    fx.trace(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);

    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::Committed));
    match fx.host.added[0].geometry().geometry() {
        RawGeometry::Polygon(ring) => assert_eq!(ring.len(), 4),
        other => panic!("Polygon erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_cancelled_attribute_form_rolls_back() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));

    fx.trace(&WOBBLY);

    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::RolledBack));
    assert_eq!(
        fx.host.calls,
        vec![
            "begin_edit_command",
            "edit_attributes",
            "destroy_edit_command"
        ]
    );
    assert!(!fx.state.tool.ignores_clicks());
}

#[test]
fn test_accepted_attribute_form_commits() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.host.accept_form = true;

    fx.trace(&WOBBLY);

    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::Committed));
    assert_eq!(
        fx.host.calls,
        vec![
            "begin_edit_command",
            "edit_attributes",
            "add_feature",
            "end_edit_command"
        ]
    );
    assert_eq!(fx.host.tool_locked_during_form, Some(true));
    assert!(!fx.state.tool.ignores_clicks());
}

#[test]
fn test_failing_add_feature_rolls_back_and_reports_error() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.host.fail_add = true;
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    let points = &WOBBLY;
    fx.press_and_move(&points[..3]);
    let result = fx.try_send(AppIntent::PointerReleased {
        sample: sample(3.0, 0.0),
    });

    assert!(result.is_err());
    assert_eq!(
        fx.host.calls,
        vec!["begin_edit_command", "add_feature", "destroy_edit_command"]
    );
    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::RolledBack));
    assert!(!fx.state.tool.is_capturing());
}

#[test]
fn test_unknown_layer_crs_fails_capture_without_host_calls() {
    init_logging();
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.send(AppIntent::CurrentLayerChanged {
        layer: Some(layer(GeometryKind::Line, Crs::projected(31468))),
    });
    fx.send(AppIntent::FreehandToolRequested);

    fx.trace(&WOBBLY);

    assert_eq!(
        fx.state.last_outcome,
        Some(CaptureOutcome::Failed(CaptureError::UnknownCrs(31468)))
    );
    assert!(fx.host.calls.is_empty());
}

/// Host-Registry, die zusätzlich EPSG:31468 kennt.
struct HostRegistry;

impl CrsRegistry for HostRegistry {
    fn projection(&self, srid: u32) -> Option<Projection> {
        match srid {
            31468 => Some(Projection::EquidistantCylindrical),
            other => BuiltinCrsRegistry.projection(other),
        }
    }
}

#[test]
fn test_host_registry_resolves_additional_crs() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.state.set_crs_registry(Box::new(HostRegistry));
    fx.send(AppIntent::CurrentLayerChanged {
        layer: Some(layer(GeometryKind::Line, Crs::projected(31468))),
    });
    fx.send(AppIntent::FreehandToolRequested);
    fx.send(AppIntent::SkipAttributeDialogChanged { skip: true });

    fx.trace(&WOBBLY);

    assert_eq!(fx.state.last_outcome, Some(CaptureOutcome::Committed));
    assert_eq!(fx.host.added.len(), 1);
    assert_eq!(fx.host.added[0].geometry().geometry().vertex_count(), 4);
}

#[test]
fn test_tool_request_needs_editable_capturable_layer() {
    init_logging();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut host = RecordingHost::default();

    controller
        .handle_intent(&mut state, &mut host, AppIntent::FreehandToolRequested)
        .expect("Intent ohne Layer sollte durchlaufen");
    assert!(!state.tool_active);

    controller
        .handle_intent(
            &mut state,
            &mut host,
            AppIntent::CurrentLayerChanged {
                layer: Some(layer(GeometryKind::Point, Crs::WEB_MERCATOR)),
            },
        )
        .expect("Layerwechsel sollte durchlaufen");
    controller
        .handle_intent(&mut state, &mut host, AppIntent::FreehandToolRequested)
        .expect("Intent mit Punkt-Layer sollte durchlaufen");
    assert!(!state.tool_active);
    assert!(!state.can_start_capture());
}

#[test]
fn test_editing_stopped_deactivates_tool_and_discards_capture() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.press_and_move(&[(0.0, 0.0), (1.0, 0.0)]);

    fx.send(AppIntent::EditingStopped);

    assert!(!fx.state.tool_active);
    assert!(!fx.state.tool.is_capturing());
    assert!(!fx.state.can_start_capture());

    fx.send(AppIntent::EditingStarted);
    assert!(fx.state.can_start_capture());
    assert!(!fx.state.tool_active);
}

#[test]
fn test_layer_change_abandons_live_capture() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));
    fx.press_and_move(&[(0.0, 0.0), (1.0, 0.0)]);

    fx.send(AppIntent::CurrentLayerChanged {
        layer: Some(LayerInfo::new(
            "flaechen",
            GeometryKind::Polygon,
            true,
            0,
            Crs::WEB_MERCATOR,
        )),
    });

    assert!(fx.state.tool_active);
    assert!(!fx.state.tool.is_capturing());
    assert_eq!(
        fx.state.last_outcome,
        Some(CaptureOutcome::Abandoned(AbandonReason::LayerUnavailable))
    );
}

#[test]
fn test_commands_are_logged_in_order() {
    let mut fx = Fixture::new(layer(GeometryKind::Line, Crs::WEB_MERCATOR));

    fx.press_and_move(&[(0.0, 0.0), (1.0, 0.0)]);

    let commands: Vec<&AppCommand> = fx.state.command_log.iter().collect();
    assert!(matches!(commands[0], AppCommand::SetCanvasCrs { .. }));
    assert!(matches!(commands[1], AppCommand::SetCurrentLayer { .. }));
    assert!(matches!(commands[2], AppCommand::ActivateFreehandTool));
    assert!(matches!(commands[3], AppCommand::BeginCapture { .. }));
    assert!(matches!(commands[4], AppCommand::ExtendCapture { .. }));
}

#[test]
fn test_tolerance_change_is_clamped_rounded_and_persisted() {
    init_logging();
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("freehand_edit.toml");

    let options = FreehandOptions::load_or_init(&path);
    assert!(path.exists());
    assert_eq!(options.tolerance, 0.0);

    let mut controller = AppController::new();
    let mut state = AppState::with_options(options, Some(path.clone()));
    let mut host = RecordingHost::default();

    controller
        .handle_intent(
            &mut state,
            &mut host,
            AppIntent::ToleranceChanged { value: 1.23456 },
        )
        .expect("Toleranz sollte gespeichert werden");
    assert_eq!(state.options.tolerance, 1.235);
    assert_eq!(FreehandOptions::load_from_file(&path).tolerance, 1.235);

    controller
        .handle_intent(
            &mut state,
            &mut host,
            AppIntent::ToleranceChanged { value: 9.0 },
        )
        .expect("Toleranz sollte gespeichert werden");
    assert_eq!(FreehandOptions::load_from_file(&path).tolerance, 5.0);

    controller
        .handle_intent(
            &mut state,
            &mut host,
            AppIntent::SkipAttributeDialogChanged { skip: true },
        )
        .expect("Einstellung sollte gespeichert werden");
    assert!(FreehandOptions::load_from_file(&path).skip_attribute_dialog);
}
