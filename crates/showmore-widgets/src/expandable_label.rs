// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Expandable text label

use crate::trim::{calculate_truncation_index, length_truncation_index, trimmed_text};
use showmore_core::color::Rgba8Srgb;
use showmore_core::config::{LabelAttributes, LabelConfig, TrimMode};
use showmore_core::event::{Event, EventCx, IsUsed, Unused, Used};
use showmore_core::layout::LayoutListener;
use showmore_core::text::{FormattableText, RichText};
use showmore_core::{Action, LayoutError, TextView};

/// A text label with "Show more" / "Show less" trailer
///
/// The label displays its text truncated to a budget of lines
/// ([`LabelConfig::max_lines`]) or characters ([`LabelConfig::max_length`]),
/// followed by an ellipsis and a clickable trailer. Clicking the trailer
/// toggles between collapsed (truncated) and expanded (full) display.
///
/// The label wraps a host [`TextView`] which performs layout, drawing and
/// hit-testing. The host drives the label:
///
/// -   after each layout pass, call [`Self::on_layout`]
/// -   when the available size changes, call [`Self::resize`]
/// -   deliver clicks on the text via [`Self::handle_event`]
///
/// Methods which modify the label push the new text to the view and return an
/// [`Action`]. When this includes [`Action::RESIZE`] the host should run a
/// layout pass.
///
/// ### Line mode
///
/// Line metrics are only meaningful for the full text. Whenever the line
/// truncation may have changed (new text, new budget, resize) the label
/// displays its full text and subscribes to the next layout pass; that pass
/// computes the truncation index and the collapsed text is displayed. Later
/// passes (caused by the label's own text change) are ignored until the next
/// subscription.
///
/// In line mode the expanded text has no trailer unless
/// [`LabelConfig::show_expanded_trailer`] is set; without a trailer the label
/// may only be collapsed again via [`Self::toggle`] or [`Self::set_collapsed`].
#[derive(Clone, Debug)]
pub struct ExpandableLabel<V: TextView> {
    view: V,
    config: LabelConfig,
    source: String,
    collapsed: bool,
    truncation: Option<usize>,
    listener: LayoutListener,
    displayed: Option<RichText>,
}

impl<V: TextView> ExpandableLabel<V> {
    /// Construct over `view` with empty text
    pub fn new(view: V, config: LabelConfig) -> Self {
        let mut label = ExpandableLabel {
            view,
            config,
            source: String::new(),
            collapsed: true,
            truncation: None,
            listener: LayoutListener::new(),
            displayed: None,
        };
        // Not yet laid out; in line mode the listener records the pending pass
        let _ = label.invalidate();
        label
    }

    /// Construct from raw attributes
    ///
    /// Attributes are resolved with defaults; absent text is empty.
    pub fn from_attributes(view: V, attrs: &LabelAttributes) -> Self {
        let mut label = Self::new(view, attrs.resolve());
        // Pending layout is recorded by the listener
        let _ = label.set_text(attrs.text());
        label
    }

    /// Set text (inline)
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        // Pending layout is recorded by the listener
        let _ = self.set_text(text);
        self
    }

    /// Get the full (source) text
    #[inline]
    pub fn text(&self) -> &str {
        &self.source
    }

    /// Set the full (source) text
    ///
    /// The toggle state is kept.
    pub fn set_text(&mut self, text: impl Into<String>) -> Action {
        self.source = text.into();
        self.invalidate()
    }

    /// Get the configuration
    #[inline]
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Get the truncation mode
    #[inline]
    pub fn mode(&self) -> TrimMode {
        self.config.mode()
    }

    /// Get the truncation index
    ///
    /// This is `None` when no truncation is needed and, in line mode, while
    /// waiting for a layout pass.
    #[inline]
    pub fn truncation_index(&self) -> Option<usize> {
        self.truncation
    }

    /// True while waiting for a layout pass
    #[inline]
    pub fn is_layout_pending(&self) -> bool {
        self.listener.is_subscribed()
    }

    /// Number of layout passes handled
    #[inline]
    pub fn layout_passes(&self) -> u64 {
        self.listener.passes()
    }

    /// True when collapsed (the initial state)
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Set the toggle state
    pub fn set_collapsed(&mut self, collapsed: bool) -> Action {
        if self.collapsed == collapsed {
            return Action::empty();
        }
        self.toggle()
    }

    /// Toggle between collapsed and expanded display
    pub fn toggle(&mut self) -> Action {
        self.collapsed = !self.collapsed;
        log::debug!("ExpandableLabel::toggle: collapsed={}", self.collapsed);
        self.render()
    }

    /// Set the collapsed trailer text
    pub fn set_collapsed_text(&mut self, text: impl Into<String>) -> Action {
        self.config.collapsed_text = text.into();
        self.render()
    }

    /// Set the expanded trailer text
    pub fn set_expanded_text(&mut self, text: impl Into<String>) -> Action {
        self.config.expanded_text = text.into();
        self.render()
    }

    /// Set the line budget
    ///
    /// When set this takes priority over the character budget. Use `None`
    /// to unset.
    pub fn set_max_lines_visible(&mut self, lines: Option<usize>) -> Action {
        self.config.max_lines = lines;
        self.invalidate()
    }

    /// Set the character budget
    ///
    /// Use `None` to unset.
    pub fn set_max_length_visible(&mut self, length: Option<usize>) -> Action {
        self.config.max_length = length;
        self.invalidate()
    }

    /// Set the collapsed trailer colour
    pub fn set_trailer_color(&mut self, color: Rgba8Srgb) -> Action {
        self.config.trailer_color = color;
        self.render()
    }

    /// Set the expanded trailer colour
    pub fn set_expanded_trailer_color(&mut self, color: Rgba8Srgb) -> Action {
        self.config.expanded_trailer_color = color;
        self.render()
    }

    /// Show the expanded trailer in line mode
    pub fn set_show_expanded_trailer(&mut self, show: bool) -> Action {
        self.config.show_expanded_trailer = show;
        self.render()
    }

    /// Replace the whole configuration
    pub fn set_config(&mut self, config: LabelConfig) -> Action {
        self.config = config;
        self.invalidate()
    }

    /// Get the view
    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Get the view mutably
    ///
    /// Changes made through this reference bypass the label; call
    /// [`Self::resize`] if they affect layout.
    #[inline]
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Take the view, destroying self
    #[inline]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Get the text last pushed to the view
    pub fn displayed(&self) -> Option<&RichText> {
        self.displayed.as_ref()
    }

    /// Derive the text to display from the current state
    ///
    /// See [`crate::trim::trimmed_text`].
    pub fn trimmed_text(&self) -> RichText {
        trimmed_text(&self.source, &self.config, self.collapsed, self.truncation)
    }

    /// Notify that the available size changed
    ///
    /// In line mode this re-subscribes to layout.
    pub fn resize(&mut self) -> Action {
        match self.mode() {
            TrimMode::Lines(_) => self.invalidate(),
            _ => Action::empty(),
        }
    }

    /// Handle a completed layout pass
    ///
    /// Does nothing unless subscribed (see [`Self::is_layout_pending`]).
    /// Otherwise computes the truncation index from the view's line metrics,
    /// displays the result and unsubscribes, in that order.
    ///
    /// Errors from the view's line metrics are returned to the caller; the
    /// subscription then remains.
    pub fn on_layout(&mut self) -> Result<Action, LayoutError> {
        if !self.listener.is_subscribed() {
            log::trace!("ExpandableLabel::on_layout: not subscribed");
            return Ok(Action::empty());
        }

        self.truncation = calculate_truncation_index(self.mode(), &self.source, &self.view)?;
        log::debug!(
            "ExpandableLabel::on_layout: mode={:?}, truncation={:?}",
            self.mode(),
            self.truncation
        );
        let action = self.render();
        self.listener.complete();
        Ok(action)
    }

    /// Handle an event
    ///
    /// A click within the trailer toggles state. So does
    /// [`Command::Activate`](showmore_core::event::Command::Activate) while
    /// a trailer is displayed.
    pub fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> IsUsed {
        let on_trailer = match event {
            Event::Click { index } => self.displayed.as_ref().is_some_and(|t| t.is_link_at(index)),
            Event::Command(cmd) if cmd.is_activate() => {
                self.displayed.as_ref().is_some_and(|t| t.has_link())
            }
            _ => false,
        };
        if !on_trailer {
            return Unused;
        }

        *cx |= self.toggle();
        Used
    }

    /// Reset truncation after a change which may affect it
    fn invalidate(&mut self) -> Action {
        let mode = self.mode();
        match mode {
            TrimMode::Lines(_) => {
                self.truncation = None;
                if self.listener.subscribe() {
                    log::trace!("ExpandableLabel: subscribed to layout");
                }
            }
            TrimMode::Length(_) | TrimMode::None => {
                self.truncation = length_truncation_index(mode, &self.source);
                self.listener.cancel();
            }
        }

        let max_lines = match mode {
            TrimMode::None => self.config.ellipsize_max_lines,
            _ => None,
        };
        self.view.set_max_lines(max_lines);

        // A pending layout pass must measure the full text, even if unchanged
        self.render() | Action::RESIZE
    }

    /// Push the derived text to the view
    ///
    /// Returns [`Action::RESIZE`] if the plain text changed, [`Action::REDRAW`]
    /// if only formatting changed.
    fn render(&mut self) -> Action {
        let text = self.trimmed_text();
        let action = match self.displayed.as_ref() {
            Some(old) if *old == text => return Action::empty(),
            Some(old) if old.as_str() == text.as_str() => Action::REDRAW,
            _ => Action::RESIZE,
        };
        log::trace!("ExpandableLabel::render: {:?}, {action:?}", text.as_str());
        self.view.set_text(text.clone());
        self.displayed = Some(text);
        action
    }
}
