//! Ordered reveal steps and the frames they produce.

use serde::{Deserialize, Serialize};

use super::window::TriggerWindow;

/// Which entrance animation the timeline uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealVariant {
    /// Four equal steps: fade metadata, grow it, slide the card up, grow it.
    #[default]
    Classic,
    /// Metadata starts centered and moves to its edge; a connector line grows
    /// once both blocks have settled.
    Connector,
}

impl RevealVariant {
    pub fn default_window(self) -> TriggerWindow {
        match self {
            Self::Classic => TriggerWindow::CLASSIC,
            Self::Connector => TriggerWindow::CONNECTOR,
        }
    }

    pub fn has_connector(self) -> bool {
        self == Self::Connector
    }
}

impl std::str::FromStr for RevealVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "connector" => Ok(Self::Connector),
            other => Err(format!("unknown reveal variant: {other}")),
        }
    }
}

/// Which column carries the metadata block. Alternates by entry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even entries put metadata on the left, odd entries on the right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    /// Horizontal offset, in percent of the block width, that centers the
    /// metadata block before it moves to its edge.
    fn center_offset_pct(self) -> f64 {
        match self {
            Self::Left => 50.0,
            Self::Right => -50.0,
        }
    }
}

/// The reveal steps, in the only order they may activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RevealStep {
    MetaFadeIn,
    MetaSettle,
    CardSlideIn,
    CardSettle,
    ConnectorGrow,
}

/// Easing curves, named as in common animation libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2InOut,
    Power3Out,
}

impl Ease {
    /// Maps `t` in `[0, 1]` onto the curve. Both endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::Power3Out => {
                let u = 1.0 - t;
                1.0 - u * u * u * u
            }
        }
    }
}

/// Visual state of the metadata or card block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub opacity: f64,
    pub scale: f64,
    /// Horizontal offset in percent of the block's own width.
    pub offset_x_pct: f64,
    /// Vertical offset in CSS pixels.
    pub offset_y_px: f64,
}

impl BlockStyle {
    pub const NEUTRAL: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        offset_x_pct: 0.0,
        offset_y_px: 0.0,
    };

    /// Inline CSS for this state.
    pub fn css(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translate({:.3}%, {:.3}px) scale({:.4});",
            self.opacity, self.offset_x_pct, self.offset_y_px, self.scale
        )
    }
}

/// Visual state of the connector line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorStyle {
    pub scale_y: f64,
}

impl ConnectorStyle {
    pub fn css(&self) -> String {
        format!("transform: scaleY({:.4}); transform-origin: top center;", self.scale_y)
    }
}

/// Everything the sequencer computes for one entry at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub meta: BlockStyle,
    pub card: BlockStyle,
    pub connector: Option<ConnectorStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Meta,
    Card,
    Connector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prop {
    Opacity,
    Scale,
    OffsetX,
    OffsetY,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    target: Target,
    prop: Prop,
    from: f64,
    to: f64,
}

#[derive(Debug, Clone)]
struct PlannedStep {
    step: RevealStep,
    start: f64,
    end: f64,
    ease: Ease,
    tweens: Vec<Tween>,
}

/// Step definition before sub-ranges and start values are resolved.
struct StepSpec {
    step: RevealStep,
    weight: f64,
    ease: Ease,
    targets: &'static [(Target, Prop, f64)],
}

const CLASSIC_STEPS: &[StepSpec] = &[
    StepSpec {
        step: RevealStep::MetaFadeIn,
        weight: 0.5,
        ease: Ease::Power1Out,
        targets: &[(Target::Meta, Prop::Opacity, 1.0)],
    },
    StepSpec {
        step: RevealStep::MetaSettle,
        weight: 0.5,
        ease: Ease::Power1Out,
        targets: &[(Target::Meta, Prop::Scale, 1.0)],
    },
    StepSpec {
        step: RevealStep::CardSlideIn,
        weight: 0.5,
        ease: Ease::Power1Out,
        targets: &[(Target::Card, Prop::Opacity, 1.0), (Target::Card, Prop::OffsetY, 0.0)],
    },
    StepSpec {
        step: RevealStep::CardSettle,
        weight: 0.5,
        ease: Ease::Power1Out,
        targets: &[(Target::Card, Prop::Scale, 1.0)],
    },
];

const CONNECTOR_STEPS: &[StepSpec] = &[
    StepSpec {
        step: RevealStep::MetaFadeIn,
        weight: 1.2,
        ease: Ease::Power3Out,
        targets: &[(Target::Meta, Prop::Opacity, 0.8), (Target::Meta, Prop::Scale, 1.1)],
    },
    StepSpec {
        step: RevealStep::MetaSettle,
        weight: 1.0,
        ease: Ease::Power2InOut,
        targets: &[
            (Target::Meta, Prop::OffsetX, 0.0),
            (Target::Meta, Prop::Scale, 1.0),
            (Target::Meta, Prop::Opacity, 1.0),
        ],
    },
    StepSpec {
        step: RevealStep::CardSlideIn,
        weight: 1.2,
        ease: Ease::Power3Out,
        targets: &[
            (Target::Card, Prop::OffsetY, 0.0),
            (Target::Card, Prop::Opacity, 1.0),
            (Target::Card, Prop::Scale, 1.05),
        ],
    },
    StepSpec {
        step: RevealStep::CardSettle,
        weight: 0.8,
        ease: Ease::Power2InOut,
        targets: &[(Target::Card, Prop::Scale, 1.0)],
    },
    StepSpec {
        step: RevealStep::ConnectorGrow,
        weight: 1.0,
        ease: Ease::Power2InOut,
        targets: &[(Target::Connector, Prop::Scale, 1.0)],
    },
];

/// Resolved step list for one variant and side.
///
/// Each step owns a contiguous sub-range of `[0, 1]`; sub-ranges follow step
/// order and each step starts from the values the previous steps left behind.
#[derive(Debug, Clone)]
pub struct StepPlan {
    variant: RevealVariant,
    initial: RevealFrame,
    steps: Vec<PlannedStep>,
}

impl StepPlan {
    pub fn new(variant: RevealVariant, side: Side) -> Self {
        let (initial, specs) = match variant {
            RevealVariant::Classic => (
                RevealFrame {
                    meta: BlockStyle {
                        opacity: 0.0,
                        scale: 0.7,
                        offset_x_pct: 0.0,
                        offset_y_px: 0.0,
                    },
                    card: BlockStyle {
                        opacity: 0.0,
                        scale: 0.7,
                        offset_x_pct: 0.0,
                        offset_y_px: 50.0,
                    },
                    connector: None,
                },
                CLASSIC_STEPS,
            ),
            RevealVariant::Connector => (
                RevealFrame {
                    meta: BlockStyle {
                        opacity: 0.0,
                        scale: 0.8,
                        offset_x_pct: side.center_offset_pct(),
                        offset_y_px: 0.0,
                    },
                    card: BlockStyle {
                        opacity: 0.0,
                        scale: 0.85,
                        offset_x_pct: 0.0,
                        offset_y_px: 200.0,
                    },
                    connector: Some(ConnectorStyle { scale_y: 0.0 }),
                },
                CONNECTOR_STEPS,
            ),
        };

        let total: f64 = specs.iter().map(|s| s.weight).sum();
        let mut cursor = initial;
        let mut elapsed = 0.0;
        let mut steps = Vec::with_capacity(specs.len());

        for (i, spec) in specs.iter().enumerate() {
            let start = elapsed / total;
            elapsed += spec.weight;
            let end = if i + 1 == specs.len() { 1.0 } else { elapsed / total };

            let tweens = spec
                .targets
                .iter()
                .map(|&(target, prop, to)| {
                    let from = read(&cursor, target, prop);
                    write(&mut cursor, target, prop, to);
                    Tween { target, prop, from, to }
                })
                .collect();

            steps.push(PlannedStep {
                step: spec.step,
                start,
                end,
                ease: spec.ease,
                tweens,
            });
        }

        Self {
            variant,
            initial,
            steps,
        }
    }

    pub fn variant(&self) -> RevealVariant {
        self.variant
    }

    /// Frame for `progress`. Values outside `[0, 1]` are clamped; NaN is 0.
    pub fn frame_at(&self, progress: f64) -> RevealFrame {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let mut frame = self.initial;

        for step in &self.steps {
            if progress <= step.start {
                break;
            }
            let t = ((progress - step.start) / (step.end - step.start)).min(1.0);
            let eased = step.ease.apply(t);
            for tween in &step.tweens {
                let value = if eased >= 1.0 {
                    tween.to
                } else {
                    tween.from + (tween.to - tween.from) * eased
                };
                write(&mut frame, tween.target, tween.prop, value);
            }
        }

        frame
    }

    /// Frame once every step has completed.
    pub fn end_frame(&self) -> RevealFrame {
        self.frame_at(1.0)
    }

    /// Steps that have started at `progress`, in order.
    pub fn active_steps(&self, progress: f64) -> Vec<RevealStep> {
        self.steps
            .iter()
            .take_while(|s| progress > s.start)
            .map(|s| s.step)
            .collect()
    }

    /// Sub-range of `[0, 1]` owned by `step`, if the plan has it.
    pub fn step_range(&self, step: RevealStep) -> Option<(f64, f64)> {
        self.steps
            .iter()
            .find(|s| s.step == step)
            .map(|s| (s.start, s.end))
    }
}

fn read(frame: &RevealFrame, target: Target, prop: Prop) -> f64 {
    match target {
        Target::Meta => read_block(&frame.meta, prop),
        Target::Card => read_block(&frame.card, prop),
        Target::Connector => frame.connector.map(|c| c.scale_y).unwrap_or(1.0),
    }
}

fn write(frame: &mut RevealFrame, target: Target, prop: Prop, value: f64) {
    match target {
        Target::Meta => write_block(&mut frame.meta, prop, value),
        Target::Card => write_block(&mut frame.card, prop, value),
        Target::Connector => {
            if let Some(connector) = frame.connector.as_mut() {
                connector.scale_y = value;
            }
        }
    }
}

fn read_block(block: &BlockStyle, prop: Prop) -> f64 {
    match prop {
        Prop::Opacity => block.opacity,
        Prop::Scale => block.scale,
        Prop::OffsetX => block.offset_x_pct,
        Prop::OffsetY => block.offset_y_px,
    }
}

fn write_block(block: &mut BlockStyle, prop: Prop, value: f64) {
    match prop {
        Prop::Opacity => block.opacity = value,
        Prop::Scale => block.scale = value,
        Prop::OffsetX => block.offset_x_pct = value,
        Prop::OffsetY => block.offset_y_px = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [RevealVariant; 2] = [RevealVariant::Classic, RevealVariant::Connector];

    fn samples() -> impl Iterator<Item = f64> {
        (0..=200).map(|i| i as f64 / 200.0)
    }

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2InOut, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
        assert_eq!(Ease::Power2InOut.apply(0.5), 0.5);
    }

    #[test]
    fn test_zero_progress_is_initial_state() {
        let plan = StepPlan::new(RevealVariant::Classic, Side::Left);
        let frame = plan.frame_at(0.0);
        assert_eq!(frame.meta.opacity, 0.0);
        assert_eq!(frame.meta.scale, 0.7);
        assert_eq!(frame.card.offset_y_px, 50.0);
        assert!(plan.active_steps(0.0).is_empty());
    }

    #[test]
    fn test_end_state_is_neutral() {
        for variant in VARIANTS {
            for side in [Side::Left, Side::Right] {
                let frame = StepPlan::new(variant, side).end_frame();
                assert_eq!(frame.meta, BlockStyle::NEUTRAL, "{variant:?} {side:?}");
                assert_eq!(frame.card, BlockStyle::NEUTRAL, "{variant:?} {side:?}");
            }
        }
        let connector = StepPlan::new(RevealVariant::Connector, Side::Left).end_frame();
        assert_eq!(connector.connector, Some(ConnectorStyle { scale_y: 1.0 }));
    }

    #[test]
    fn test_classic_quarters() {
        let plan = StepPlan::new(RevealVariant::Classic, Side::Left);
        assert_eq!(plan.step_range(RevealStep::MetaFadeIn), Some((0.0, 0.25)));
        assert_eq!(plan.step_range(RevealStep::CardSettle), Some((0.75, 1.0)));
        assert_eq!(plan.step_range(RevealStep::ConnectorGrow), None);

        // Step 1 done, step 2 not started
        let frame = plan.frame_at(0.25);
        assert_eq!(frame.meta.opacity, 1.0);
        assert_eq!(frame.meta.scale, 0.7);
        assert_eq!(frame.card.opacity, 0.0);
    }

    #[test]
    fn test_frame_is_deterministic() {
        for variant in VARIANTS {
            let plan = StepPlan::new(variant, Side::Right);
            for p in samples() {
                assert_eq!(plan.frame_at(p), plan.frame_at(p));
            }
        }
    }

    #[test]
    fn test_activation_is_monotone() {
        for variant in VARIANTS {
            let plan = StepPlan::new(variant, Side::Left);
            let mut previous = Vec::new();
            for p in samples() {
                let active = plan.active_steps(p);
                assert!(active.starts_with(&previous), "{variant:?} at {p}");
                previous = active;
            }
            assert_eq!(previous.len(), if variant.has_connector() { 5 } else { 4 });
        }
    }

    #[test]
    fn test_connector_waits_for_blocks() {
        let plan = StepPlan::new(RevealVariant::Connector, Side::Left);
        let (grow_start, _) = plan.step_range(RevealStep::ConnectorGrow).unwrap();
        let settled = plan.frame_at(grow_start);
        assert_eq!(settled.meta, BlockStyle::NEUTRAL);
        assert_eq!(settled.card, BlockStyle::NEUTRAL);
        assert_eq!(settled.connector, Some(ConnectorStyle { scale_y: 0.0 }));
    }

    #[test]
    fn test_meta_shifts_toward_its_edge() {
        let left = StepPlan::new(RevealVariant::Connector, Side::Left);
        let right = StepPlan::new(RevealVariant::Connector, Side::Right);
        assert_eq!(left.frame_at(0.1).meta.offset_x_pct, 50.0);
        assert_eq!(right.frame_at(0.1).meta.offset_x_pct, -50.0);
        let (_, settle_end) = left.step_range(RevealStep::MetaSettle).unwrap();
        assert_eq!(left.frame_at(settle_end).meta.offset_x_pct, 0.0);
    }

    #[test]
    fn test_out_of_range_progress_clamps() {
        let plan = StepPlan::new(RevealVariant::Connector, Side::Left);
        assert_eq!(plan.frame_at(-3.0), plan.frame_at(0.0));
        assert_eq!(plan.frame_at(7.0), plan.end_frame());
        assert_eq!(plan.frame_at(f64::NAN), plan.frame_at(0.0));
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("connector".parse::<RevealVariant>(), Ok(RevealVariant::Connector));
        assert!("fancy".parse::<RevealVariant>().is_err());
    }

    #[test]
    fn test_css() {
        assert_eq!(
            BlockStyle::NEUTRAL.css(),
            "opacity: 1.0000; transform: translate(0.000%, 0.000px) scale(1.0000);"
        );
        assert!(ConnectorStyle { scale_y: 0.5 }.css().starts_with("transform: scaleY(0.5000)"));
    }
}
