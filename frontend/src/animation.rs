//! Hero entrance animation, described as data.
//!
//! [`hero_plan`] builds the sequence and [`play`] hands it to an [`Animator`].
//! The browser implementation lives in `js.rs` and forwards to GSAP; nothing
//! here knows how tweens are actually rendered.

use serde::Serialize;

use crate::error::Result;

/// What a tween applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Targets {
    Selector(&'static str),
    /// Character fragments of the matched text, split into words and chars.
    Chars(&'static str),
    /// Line fragments of the matched text.
    Lines(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_props: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<&'static str>,
}

/// A "from" step on the timeline. `position` uses the library's relative
/// syntax, e.g. `-=0.6` overlaps the previous step by 0.6s.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub targets: Targets,
    pub vars: TweenVars,
    pub position: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineDefaults {
    pub ease: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScrollTrigger {
    pub trigger: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub scrub: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTween {
    #[serde(skip)]
    pub target: &'static str,
    pub y: &'static str,
    pub scroll_trigger: ScrollTrigger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroPlan {
    pub reveal: (Targets, TweenVars),
    pub defaults: TimelineDefaults,
    pub steps: Vec<Step>,
    pub parallax: ScrollTween,
}

pub trait Animator {
    fn set(&self, targets: Targets, vars: &TweenVars) -> Result<()>;
    fn timeline(&self, defaults: &TimelineDefaults, steps: &[Step]) -> Result<()>;
    fn scroll_linked(&self, tween: &ScrollTween) -> Result<()>;
}

pub fn hero_plan() -> HeroPlan {
    HeroPlan {
        reveal: (
            Targets::Selector(".reveal-text"),
            TweenVars {
                visibility: Some("visible"),
                ..TweenVars::default()
            },
        ),
        defaults: TimelineDefaults { ease: "power4.out" },
        steps: vec![
            Step {
                targets: Targets::Chars(".hero__title"),
                vars: TweenVars {
                    y: Some(40.0),
                    opacity: Some(0.0),
                    duration: Some(1.0),
                    stagger: Some(0.02),
                    delay: Some(0.3),
                    ..TweenVars::default()
                },
                position: None,
            },
            Step {
                targets: Targets::Lines(".hero__subtitle"),
                vars: TweenVars {
                    y: Some(20.0),
                    opacity: Some(0.0),
                    duration: Some(0.8),
                    stagger: Some(0.1),
                    ..TweenVars::default()
                },
                position: Some("-=0.6"),
            },
            // clearProps hands the buttons back to CSS so hover styles work.
            Step {
                targets: Targets::Selector(".hero__actions .btn"),
                vars: TweenVars {
                    y: Some(30.0),
                    opacity: Some(0.0),
                    duration: Some(0.8),
                    stagger: Some(0.1),
                    clear_props: Some("all"),
                    ..TweenVars::default()
                },
                position: Some("-=0.6"),
            },
            Step {
                targets: Targets::Selector(".hero__scroll-indicator"),
                vars: TweenVars {
                    opacity: Some(0.0),
                    duration: Some(1.0),
                    ..TweenVars::default()
                },
                position: Some("-=0.4"),
            },
        ],
        parallax: ScrollTween {
            target: ".hero__bg-img",
            y: "15%",
            scroll_trigger: ScrollTrigger {
                trigger: ".hero",
                start: "top top",
                end: "bottom top",
                scrub: true,
            },
        },
    }
}

pub fn play(animator: &dyn Animator, plan: &HeroPlan) -> Result<()> {
    let (targets, vars) = &plan.reveal;
    animator.set(*targets, vars)?;
    animator.timeline(&plan.defaults, &plan.steps)?;
    animator.scroll_linked(&plan.parallax)
}
