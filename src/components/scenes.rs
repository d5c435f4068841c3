//! Animated scene backdrops.
//!
//! The core scene types produce a `SceneFrame` per instant; these components
//! drive a clock and draw the frame as SVG.

use std::time::{Duration, Instant};

use casadeoro_core::scene::{ArchitectureScene, HeroScene, Orb, Ring, SceneFrame, Shape, GOLD};
use dioxus::prelude::*;

/// Frame interval (~30 fps is plenty for slow ambient motion)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

const HERO_VIEW: (f64, f64) = (1600.0, 900.0);
const ARCHITECTURE_VIEW: (f64, f64) = (800.0, 800.0);

/// Shared gradients and filters referenced by every scene
const SCENE_DEFS: &str = r##"
<defs>
  <radialGradient id="orb-gold" cx="50%" cy="50%" r="50%" fx="32%" fy="30%">
    <stop offset="0%" stop-color="#F6E7C1"/>
    <stop offset="45%" stop-color="#C5A059"/>
    <stop offset="100%" stop-color="#6B5325"/>
  </radialGradient>
  <radialGradient id="orb-stone" cx="50%" cy="50%" r="50%" fx="32%" fy="30%">
    <stop offset="0%" stop-color="#4A4640"/>
    <stop offset="55%" stop-color="#1A1A1A"/>
    <stop offset="100%" stop-color="#050505"/>
  </radialGradient>
  <filter id="ring-glow" x="-20%" y="-20%" width="140%" height="140%">
    <feGaussianBlur stdDeviation="3" result="blur"/>
    <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
  </filter>
</defs>
"##;

/// Invisible SVG holding the shared scene definitions
#[component]
pub fn SceneDefs() -> Element {
    rsx! {
        svg {
            class: "scene-defs",
            width: "0",
            height: "0",
            "aria-hidden": "true",
            dangerous_inner_html: SCENE_DEFS,
        }
    }
}

/// Seconds since the component mounted, ticking at the frame interval
fn use_scene_clock() -> Signal<f64> {
    let mut clock = use_signal(|| 0.0_f64);
    let started = use_hook(Instant::now);

    use_effect(move || {
        spawn(async move {
            let mut ticker = tokio::time::interval(FRAME_INTERVAL);
            loop {
                ticker.tick().await;
                clock.set(started.elapsed().as_secs_f64());
            }
        });
    });

    clock
}

fn orb_fill(orb: &Orb) -> &'static str {
    if orb.color == GOLD {
        "url(#orb-gold)"
    } else {
        "url(#orb-stone)"
    }
}

fn ring_transform(ring: &Ring) -> String {
    let o = &ring.outline;
    format!("rotate({:.2} {:.2} {:.2})", o.angle_degrees, o.cx, o.cy)
}

fn render_shape(shape: &Shape) -> Element {
    match shape {
        Shape::Orb(orb) => {
            let transform = format!("rotate({:.2} {:.2} {:.2})", orb.highlight_degrees, orb.cx, orb.cy);
            rsx! {
                circle {
                    cx: format!("{:.2}", orb.cx),
                    cy: format!("{:.2}", orb.cy),
                    r: format!("{:.2}", orb.r),
                    fill: orb_fill(orb),
                    "transform": transform,
                }
            }
        }
        Shape::Ring(ring) => {
            let o = ring.outline;
            let filter = if ring.glow { "url(#ring-glow)" } else { "none" };
            rsx! {
                ellipse {
                    cx: format!("{:.2}", o.cx),
                    cy: format!("{:.2}", o.cy),
                    "rx": format!("{:.2}", o.rx),
                    "ry": format!("{:.2}", o.ry),
                    fill: "none",
                    stroke: ring.color,
                    stroke_width: format!("{:.2}", ring.stroke_width),
                    "transform": ring_transform(ring),
                    "filter": filter,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SceneViewProps {
    pub frame: SceneFrame,
    #[props(default)]
    pub class: Option<String>,
}

/// Draw one scene frame, scaled to cover its container
#[component]
pub fn SceneView(props: SceneViewProps) -> Element {
    let frame = &props.frame;
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "scene {class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{view_box}",
            "preserveAspectRatio": "xMidYMid slice",
            "aria-hidden": "true",
            for spark in frame.sparks.iter() {
                circle {
                    class: "spark",
                    cx: format!("{:.1}", spark.cx),
                    cy: format!("{:.1}", spark.cy),
                    r: format!("{:.2}", spark.r),
                    fill: GOLD,
                    opacity: format!("{:.2}", spark.opacity),
                }
            }
            for shape in frame.shapes.iter() {
                {render_shape(shape)}
            }
        }
    }
}

/// Floating gold spheres behind the hero copy
#[component]
pub fn HeroBackdrop() -> Element {
    let clock = use_scene_clock();
    let scene = use_hook(HeroScene::new);

    let (width, height) = HERO_VIEW;
    let frame = scene.frame(clock(), width, height);

    rsx! {
        div { class: "hero-scene",
            SceneView { frame }
        }
        div { class: "hero-scene-fade" }
    }
}

/// Interlocking rings and stones in the experience panel
#[component]
pub fn ArchitectureBackdrop() -> Element {
    let clock = use_scene_clock();

    let (width, height) = ARCHITECTURE_VIEW;
    let frame = ArchitectureScene.frame(clock(), width, height);

    rsx! {
        div { class: "architecture-scene",
            SceneView { frame }
        }
    }
}
