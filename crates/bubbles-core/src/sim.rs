//! Owned simulation state and the per-tick orchestration.
//!
//! External event handlers never touch the bubble set directly: they enqueue
//! [`InputIntent`]s which the frame loop drains exactly once per tick, so a
//! tick always observes a consistent snapshot of the interaction state.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

use crate::bubble::{seed_bubbles, Bubble, BubbleId};
use crate::color::PaletteEntry;
use crate::interaction::{click_target, hover_target, CopyRegion, PointerState};
use crate::physics::{self, Surface};

/// Input event queued by the frontend, consumed on the next tick.
#[derive(Clone, Debug)]
pub enum InputIntent {
    /// Pointer moved; coordinates already converted to logical canvas pixels.
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    Click { x: f32, y: f32 },
    EscapePressed,
    /// Logical surface changed; triggers a full reseed.
    Resize { width: f32, height: f32 },
    ThemeChanged { dark: bool },
}

/// Side effect requested by a tick, performed by the frontend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write the canonical uppercase hex code to the system clipboard.
    CopyText(String),
}

pub struct Simulation {
    pub bubbles: Vec<Bubble>,
    pub pointer: PointerState,
    pub selected: Option<BubbleId>,
    /// Derived fresh each tick; never set to the selected bubble.
    pub hovered: Option<BubbleId>,
    pub surface: Surface,
    pub dark: bool,
    copy_region: Option<CopyRegion>,
    palette: Vec<PaletteEntry>,
    intents: SmallVec<[InputIntent; 8]>,
    rng: StdRng,
}

impl Simulation {
    pub fn new(palette: Vec<PaletteEntry>, surface: Surface, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bubbles = seed_bubbles(&palette, surface, &mut rng);
        log::info!(
            "[sim] seeded {} bubbles on {:.0}x{:.0}",
            bubbles.len(),
            surface.width,
            surface.height
        );
        Self {
            bubbles,
            pointer: PointerState::default(),
            selected: None,
            hovered: None,
            surface,
            dark: false,
            copy_region: None,
            palette,
            intents: SmallVec::new(),
            rng,
        }
    }

    pub fn queue(&mut self, intent: InputIntent) {
        self.intents.push(intent);
    }

    /// Replaces the color list and reseeds.
    pub fn set_palette(&mut self, palette: Vec<PaletteEntry>) {
        self.palette = palette;
        self.reseed();
    }

    /// Full replacement of the bubble set; transient interaction state and
    /// the stale hit-region are dropped with it.
    pub fn reseed(&mut self) {
        self.bubbles = seed_bubbles(&self.palette, self.surface, &mut self.rng);
        self.selected = None;
        self.hovered = None;
        self.copy_region = None;
    }

    /// Stores the hit-region the renderer produced for this frame (`None`
    /// whenever no bubble is selected). Consulted by the next click.
    pub fn set_copy_region(&mut self, region: Option<CopyRegion>) {
        self.copy_region = region;
    }

    pub fn copy_region(&self) -> Option<&CopyRegion> {
        self.copy_region.as_ref()
    }

    /// One simulation tick: drain queued intents, refresh the hover target,
    /// then advance the physics. Requested side effects are appended to
    /// `effects`.
    pub fn tick(&mut self, effects: &mut Vec<Effect>) {
        let intents = std::mem::take(&mut self.intents);
        for intent in intents {
            self.apply(intent, effects);
        }

        self.hovered = if self.pointer.inside {
            hover_target(&self.bubbles, self.pointer.pos).cloned()
        } else {
            None
        };
        // Selection overrides hover as the radius emphasis.
        if self.hovered.is_some() && self.hovered == self.selected {
            self.hovered = None;
        }

        physics::step(
            &mut self.bubbles,
            self.surface,
            self.hovered.as_ref(),
            self.selected.as_ref(),
        );
    }

    fn apply(&mut self, intent: InputIntent, effects: &mut Vec<Effect>) {
        match intent {
            InputIntent::PointerMove { x, y } => {
                self.pointer.pos = Vec2::new(x, y);
                self.pointer.inside = true;
            }
            InputIntent::PointerLeave => self.pointer.inside = false,
            InputIntent::Click { x, y } => self.handle_click(Vec2::new(x, y), effects),
            InputIntent::EscapePressed => self.selected = None,
            InputIntent::Resize { width, height } => {
                self.surface = Surface::new(width, height);
                self.reseed();
            }
            InputIntent::ThemeChanged { dark } => self.dark = dark,
        }
    }

    fn handle_click(&mut self, p: Vec2, effects: &mut Vec<Effect>) {
        // The previous frame's copy affordance wins over bubble hit-testing.
        if let Some(region) = &self.copy_region {
            if self.selected.as_ref() == Some(&region.owner) && region.rect.contains(p) {
                let owner = region.owner.clone();
                if let Some(b) = self.bubbles.iter_mut().find(|b| b.id == owner) {
                    effects.push(Effect::CopyText(b.hex.clone()));
                    b.pulse = 1.0;
                    log::info!("[click] copy {}", b.hex);
                }
                return;
            }
        }

        match click_target(&self.bubbles, p).cloned() {
            None => self.selected = None,
            Some(id) if self.selected.as_ref() == Some(&id) => self.selected = None,
            Some(id) => self.selected = Some(id),
        }
    }
}
