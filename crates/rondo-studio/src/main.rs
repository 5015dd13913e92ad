//! Headless demo host: builds every rondo shape, prints its layout, then
//! replays a scripted pointer session against the gesture controller.

use anyhow::{ensure, Context, Result};
use glam::Vec2;
use log::info;

use rondo_geom::{rounded, web, GeometryBatch};
use rondo_pick::input::{
    dispatch, InputEvent, InputState, MouseButton, MouseButtonState, MouseWheelDelta,
    PointerButtonEvent, PointerMoveEvent,
};
use rondo_pick::logging::{init_logging, LoggingConfig};
use rondo_pick::{Camera, Controller, PickableShape, Viewport};

const DEMO_VIEWPORT: Viewport = Viewport { width: 800.0, height: 600.0 };

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  rondo studio — tessellation and picking walkthrough");
    println!();

    print_batch("rounded rectangle 1.2 x 0.8, rc 0.15", &rounded::rounded_rectangle(1.2, 0.8, 0.15))?;
    print_batch("rounded triangle r 0.5, rc 0.1", &rounded::rounded_triangle(0.5, 0.1))?;
    print_batch("rounded polygon sheet n = 3..=14", &rounded::rounded_polygon_sheet(3..=14, 0.5, 0.08))?;

    let ring = rondo_geom::ring::hollow_circle(0.8, 0.2, 30);
    println!("  hollow circle 0.8 / 0.2, 30 triangles    {:>4} vertices (strip)", ring.len());

    let (web_batch, layout) = web::pentagon_web();
    print_batch("pentagon web", &web_batch)?;
    println!(
        "    pentagon {:?}, rings {:?}..{:?}, spokes {:?}",
        layout.pentagon, layout.rings[0], layout.rings[4], layout.spokes
    );
    println!();

    replay_session()
}

fn print_batch(label: &str, batch: &GeometryBatch) -> Result<()> {
    batch.validate().with_context(|| format!("bad batch: {label}"))?;
    println!(
        "  {label:<42} {:>4} vertices in {} ranges",
        batch.vertex_count(),
        batch.ranges().len()
    );
    Ok(())
}

/// Drives the controller through a grab, a drag, a rotation, and a few
/// scroll steps, checking the transform after each gesture.
fn replay_session() -> Result<()> {
    let outline = rondo_geom::polygon::polygon_fan(6, 0.4);
    let shape = PickableShape::from_vertices(&outline);
    let mut controller = Controller::new(shape, Camera::ortho_2d(DEMO_VIEWPORT));
    let mut input = InputState::default();

    println!("  scripted session (hexagon, circumradius 0.4):");

    // Grab the center and drag up-right.
    for ev in [
        press(MouseButton::Left, world_to_screen(Vec2::ZERO)),
        moved(world_to_screen(Vec2::new(0.3, 0.2))),
        release(MouseButton::Left, world_to_screen(Vec2::new(0.3, 0.2))),
    ] {
        dispatch(&mut input, &mut controller, &ev);
    }
    let t = controller.transform();
    ensure!((t.translation - Vec2::new(0.3, 0.2)).length() < 1e-4, "drag missed: {t:?}");
    println!("    drag      -> translation ({:+.2}, {:+.2})", t.translation.x, t.translation.y);

    // Quarter-turn with the right button.
    let center = t.translation;
    for ev in [
        press(MouseButton::Right, world_to_screen(center + Vec2::new(0.3, 0.0))),
        moved(world_to_screen(center + Vec2::new(0.0, 0.3))),
        release(MouseButton::Right, world_to_screen(center + Vec2::new(0.0, 0.3))),
    ] {
        dispatch(&mut input, &mut controller, &ev);
    }
    let t = controller.transform();
    ensure!((t.rotation_degrees() - 90.0).abs() < 0.01, "rotation missed: {t:?}");
    println!("    rotate    -> {:.1} deg", t.rotation_degrees());

    // Four scroll lines toward the camera shrink by 4 steps.
    for _ in 0..4 {
        dispatch(&mut input, &mut controller, &InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 },
        });
    }
    let t = controller.transform();
    ensure!((t.scale - 0.8).abs() < 1e-4, "scale missed: {t:?}");
    println!("    scroll x4 -> scale {:.2}", t.scale);

    // Keep scrolling far past the lower bound; the scale saturates.
    for _ in 0..50 {
        dispatch(&mut input, &mut controller, &InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 },
        });
    }
    let t = controller.transform();
    ensure!(t.scale == 0.3, "clamp missed: {t:?}");
    println!("    scroll x50 -> scale {:.2} (clamped)", t.scale);

    info!("session complete: {:?}", controller.transform());
    println!();
    println!("  session complete.");
    Ok(())
}

// ── event helpers ─────────────────────────────────────────────────────────

fn world_to_screen(world: Vec2) -> Vec2 {
    Vec2::new(
        (world.x + 1.0) / 2.0 * DEMO_VIEWPORT.width,
        (1.0 - world.y * DEMO_VIEWPORT.aspect()) / 2.0 * DEMO_VIEWPORT.height,
    )
}

fn press(button: MouseButton, pos: Vec2) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent {
        button,
        state: MouseButtonState::Pressed,
        x: pos.x,
        y: pos.y,
    })
}

fn release(button: MouseButton, pos: Vec2) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent {
        button,
        state: MouseButtonState::Released,
        x: pos.x,
        y: pos.y,
    })
}

fn moved(pos: Vec2) -> InputEvent {
    InputEvent::PointerMoved(PointerMoveEvent { x: pos.x, y: pos.y })
}
