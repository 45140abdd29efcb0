//! One shopper's pass through the flow: intent, bundle, tweaks, cart.
//!
//! The session owns the current bundle and replaces it wholesale on every
//! change. Once the cart is locked all edits are refused. Starting over is
//! dropping the session and opening a new one.

use crate::adjust::{Feedback, Preferences, SliderKind};
use crate::alternatives::Alternative;
use crate::bundle::{Bundle, BundleRequest};
use crate::catalog::Style;
use crate::checkout::CheckoutSnapshot;
use crate::engine::Engine;
use crate::intent::IntentData;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("unknown catalog item: {0}")]
    UnknownItem(String),
    #[error("item not in bundle: {0}")]
    NotInBundle(String),
    #[error("item already in bundle: {0}")]
    AlreadyInBundle(String),
    #[error("{replacement} is not a {category} item")]
    CategoryMismatch {
        replacement: String,
        category: String,
    },
    #[error("cannot remove the last item in the bundle")]
    LastItem,
    #[error("cannot remove {0}, it is the last required item in the bundle")]
    LastRequired(String),
    #[error("cart is locked, start over to make changes")]
    CartLocked,
    #[error("nothing has been added to the cart")]
    CartEmpty,
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// The bundle as it was when the shopper added it to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub bundle: Bundle,
    pub style: Style,
}

pub struct ShopSession<'e> {
    engine: &'e Engine,
    intent: IntentData,
    base_style: Style,
    style: Style,
    vibe: f64,
    budget_priority: f64,
    bundle: Bundle,
    feedback: Option<Feedback>,
    updates: u64,
    cart: Option<CartSnapshot>,
}

impl<'e> ShopSession<'e> {
    /// Open a session and build the initial bundle from the skill level.
    pub fn start(engine: &'e Engine, intent: IntentData) -> Self {
        let base_style = intent.skill_level.default_style();
        let slider = intent.skill_level.default_slider();
        let bundle = engine.generate_bundle(&BundleRequest {
            budget: intent.budget,
            size: intent.size.clone(),
            style: base_style,
        });
        tracing::info!(
            skill = %intent.skill_level,
            style = %base_style,
            items = bundle.len(),
            total = bundle.total_price(),
            "session started"
        );
        Self {
            engine,
            intent,
            base_style,
            style: base_style,
            vibe: slider,
            budget_priority: slider,
            bundle,
            feedback: None,
            updates: 0,
            cart: None,
        }
    }

    pub fn intent(&self) -> &IntentData {
        &self.intent
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// Style from the skill level; swaps pick against this.
    pub fn base_style(&self) -> Style {
        self.base_style
    }

    /// Style behind the current bundle.
    pub fn style(&self) -> Style {
        self.style
    }

    pub fn vibe(&self) -> f64 {
        self.vibe
    }

    pub fn budget_priority(&self) -> f64 {
        self.budget_priority
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Bundle replacements since the session started.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn cart(&self) -> Option<&CartSnapshot> {
        self.cart.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.cart.is_some()
    }

    pub fn set_vibe(&mut self, vibe: f64) -> Result<Feedback> {
        self.ensure_unlocked()?;
        self.vibe = vibe;
        Ok(self.readjust(SliderKind::Vibe))
    }

    pub fn set_budget_priority(&mut self, budget_priority: f64) -> Result<Feedback> {
        self.ensure_unlocked()?;
        self.budget_priority = budget_priority;
        Ok(self.readjust(SliderKind::Budget))
    }

    /// Swap `id` for the best other item in its category. `Ok(false)` when
    /// the category has nothing left to offer; the bundle is then unchanged.
    pub fn swap(&mut self, id: &str) -> Result<bool> {
        self.ensure_unlocked()?;
        let current = self
            .bundle
            .find(id)
            .ok_or_else(|| SessionError::NotInBundle(id.to_string()))?;
        let exclude = self.bundle.ids();
        let Some(replacement) =
            self.engine
                .get_replacement(&current.item.category, self.base_style, &exclude)
        else {
            tracing::debug!(item = id, "no replacement available");
            return Ok(false);
        };
        let Some(next) = self.bundle.replacing(id, replacement.clone()) else {
            return Ok(false);
        };
        tracing::debug!(from = id, to = %replacement.id, "item swapped");
        self.commit(next);
        Ok(true)
    }

    /// Replace `id` with a specific catalog item, typically an alternative.
    pub fn replace(&mut self, id: &str, replacement_id: &str) -> Result<()> {
        self.ensure_unlocked()?;
        let current = self
            .bundle
            .find(id)
            .ok_or_else(|| SessionError::NotInBundle(id.to_string()))?;
        let replacement = self
            .engine
            .catalog()
            .get(replacement_id)
            .ok_or_else(|| SessionError::UnknownItem(replacement_id.to_string()))?;
        if self.bundle.contains(replacement_id) {
            return Err(SessionError::AlreadyInBundle(replacement_id.to_string()));
        }
        if replacement.category != current.item.category {
            return Err(SessionError::CategoryMismatch {
                replacement: replacement_id.to_string(),
                category: current.item.category.label(),
            });
        }
        let next = self
            .bundle
            .replacing(id, replacement.clone())
            .ok_or_else(|| SessionError::NotInBundle(id.to_string()))?;
        self.commit(next);
        Ok(())
    }

    /// Drop `id` from the bundle. The bundle always keeps at least one item
    /// and at least one required-category item.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.ensure_unlocked()?;
        let target = self
            .bundle
            .find(id)
            .ok_or_else(|| SessionError::NotInBundle(id.to_string()))?;
        if self.bundle.len() <= 1 {
            return Err(SessionError::LastItem);
        }
        if self.engine.is_required(&target.item.category) {
            let others_required = self
                .bundle
                .items()
                .iter()
                .filter(|b| b.id() != id)
                .any(|b| self.engine.is_required(&b.item.category));
            if !others_required {
                return Err(SessionError::LastRequired(id.to_string()));
            }
        }
        let next = self
            .bundle
            .without(id)
            .ok_or_else(|| SessionError::NotInBundle(id.to_string()))?;
        self.commit(next);
        Ok(())
    }

    /// True when `id` is in the bundle and its category has another item to offer.
    pub fn can_swap(&self, id: &str) -> bool {
        !self.is_locked()
            && self
                .bundle
                .find(id)
                .is_some_and(|b| self.engine.can_replace(&b.item, &self.bundle))
    }

    pub fn alternatives_for(&self, id: &str) -> Result<Vec<Alternative>> {
        let item = self
            .engine
            .catalog()
            .get(id)
            .ok_or_else(|| SessionError::UnknownItem(id.to_string()))?;
        Ok(self.engine.get_alternatives(item, &self.bundle))
    }

    /// Freeze the current bundle. Repeated calls keep the first snapshot.
    pub fn add_to_cart(&mut self) -> &CartSnapshot {
        if self.cart.is_none() {
            tracing::info!(
                items = self.bundle.len(),
                total = self.bundle.total_price(),
                "bundle added to cart"
            );
        }
        self.cart.get_or_insert_with(|| CartSnapshot {
            bundle: self.bundle.clone(),
            style: self.style,
        })
    }

    pub fn checkout(&self) -> Result<CheckoutSnapshot> {
        let cart = self.cart.as_ref().ok_or(SessionError::CartEmpty)?;
        Ok(CheckoutSnapshot::from_bundle(&cart.bundle))
    }

    fn ensure_unlocked(&self) -> Result<()> {
        if self.is_locked() {
            Err(SessionError::CartLocked)
        } else {
            Ok(())
        }
    }

    fn readjust(&mut self, changed: SliderKind) -> Feedback {
        let preferences = Preferences {
            budget: self.intent.budget,
            size: self.intent.size.clone(),
        };
        let adjustment = self.engine.adjust_bundle(
            &self.bundle,
            self.vibe,
            self.budget_priority,
            &preferences,
            changed,
        );
        self.style = adjustment.style;
        self.feedback = Some(adjustment.feedback);
        self.commit(adjustment.bundle);
        adjustment.feedback
    }

    fn commit(&mut self, bundle: Bundle) {
        self.bundle = bundle;
        self.updates += 1;
    }
}
