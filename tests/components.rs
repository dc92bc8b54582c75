//! Widget integration tests: the checkbox interaction protocol end to
//! end, through the same entry points an event dispatcher would use.

use ember_tui::{
    Checkbox, ComponentMetadata, ComponentState, ComponentStyleSet, DefaultCheckboxRenderer,
    MouseEvent, MouseEventType, Position, RendererStub, Rgba, Size, StyleSet, TileSurface,
    UIEventPhase, UIEventResponse, UIEventTarget,
};

const TEXT: &str = "Button text";

fn component_styles() -> ComponentStyleSet {
    ComponentStyleSet::builder()
        .with_default_style(StyleSet::new(Rgba::CYAN, Rgba::TRANSPARENT))
        .with_highlighted_style(StyleSet::new(Rgba::BLACK, Rgba::CYAN))
        .with_focused_style(StyleSet::new(Rgba::WHITE, Rgba::CYAN))
        .with_active_style(StyleSet::new(Rgba::YELLOW, Rgba::CYAN))
        .with_disabled_style(StyleSet::new(Rgba::GRAY, Rgba::TRANSPARENT))
        .build()
}

fn checkbox() -> (Checkbox, RendererStub) {
    let stub = RendererStub::wrapping(DefaultCheckboxRenderer);
    let checkbox = Checkbox::new(
        ComponentMetadata::new(Size::new(20, 1), Position::new(2, 3), component_styles()),
        stub.clone(),
        TEXT,
    );
    stub.clear();
    (checkbox, stub)
}

fn enter_event() -> MouseEvent {
    MouseEvent::new(MouseEventType::MouseEntered, 1, Position::ZERO)
}

#[test]
fn text_lands_at_offset_four_in_default_style() {
    let (checkbox, _stub) = checkbox();
    let offset = 4;
    for (i, expected) in TEXT.chars().enumerate() {
        let tile = checkbox
            .graphics()
            .tile_at(Position::new(i as i32 + offset, 0))
            .expect("tile in bounds");
        assert_eq!(tile.glyph, expected);
        assert_eq!(
            tile.style,
            component_styles().fetch_style_for(ComponentState::Default)
        );
    }
}

#[test]
fn mouse_enter_then_focus_ends_focused_and_processed() {
    let (mut checkbox, _stub) = checkbox();

    checkbox.mouse_entered(enter_event(), UIEventPhase::Target);
    assert_eq!(checkbox.state(), ComponentState::Highlighted);

    let result = checkbox.focus_given();
    assert_eq!(result, UIEventResponse::Processed);
    assert_eq!(checkbox.state(), ComponentState::Focused);
}

#[test]
fn focused_activation_is_two_renders_and_a_toggle() {
    let (mut checkbox, stub) = checkbox();
    checkbox.focus_given();
    stub.clear();

    assert_eq!(checkbox.activated(), UIEventResponse::Processed);
    assert_eq!(checkbox.state(), ComponentState::Active);
    assert_eq!(stub.render_count(), 2);
    assert!(checkbox.is_checked());

    let renderings = stub.renderings();
    // First render shows the ACTIVE style, second the toggled content.
    assert_eq!(renderings[0].state, ComponentState::Active);
    assert_eq!(renderings[0].checked, Some(false));
    assert_eq!(renderings[1].checked, Some(true));
}

#[test]
fn activation_ends_back_where_focus_points() {
    let (mut checkbox, _stub) = checkbox();

    // Focused episode: ACTIVE -> FOCUSED.
    checkbox.focus_given();
    checkbox.activated();
    assert_eq!(checkbox.activation_ended(), Some(ComponentState::Focused));

    // Hover-only episode: ACTIVE -> HIGHLIGHTED.
    checkbox.focus_taken();
    checkbox.mouse_entered(enter_event(), UIEventPhase::Target);
    checkbox.activated();
    assert_eq!(
        checkbox.activation_ended(),
        Some(ComponentState::Highlighted)
    );
}

#[test]
fn capture_and_bubble_phases_do_not_transition() {
    let (mut checkbox, stub) = checkbox();
    for phase in [UIEventPhase::Capture, UIEventPhase::Bubble] {
        assert_eq!(
            checkbox.mouse_entered(enter_event(), phase),
            UIEventResponse::Ignored
        );
    }
    assert_eq!(checkbox.state(), ComponentState::Default);
    assert_eq!(stub.render_count(), 0);
}

#[test]
fn each_transition_paints_the_resolved_style() {
    let (mut checkbox, stub) = checkbox();
    let styles = component_styles();

    checkbox.mouse_entered(enter_event(), UIEventPhase::Target);
    assert_eq!(
        stub.last_rendering().unwrap().style,
        styles.fetch_style_for(ComponentState::Highlighted)
    );

    checkbox.focus_given();
    assert_eq!(
        stub.last_rendering().unwrap().style,
        styles.fetch_style_for(ComponentState::Focused)
    );

    // One repaint per non-activation transition.
    assert_eq!(stub.render_count(), 2);
}

#[test]
fn disable_enable_round_trip() {
    let (mut checkbox, _stub) = checkbox();
    checkbox.focus_given();
    checkbox.set_enabled(false);
    assert_eq!(checkbox.state(), ComponentState::Disabled);
    assert_eq!(checkbox.activated(), UIEventResponse::Ignored);

    checkbox.set_enabled(true);
    // Focus was never taken away, so re-enabling restores FOCUSED.
    assert_eq!(checkbox.state(), ComponentState::Focused);
}
