//! Context menu render pass
//!
//! Draws the popup for a `MenuState` and reports everything that happened as
//! `MenuEvent`s. The embedding context owns the state: this pass reads it,
//! invokes clicked actions, and requests dismissal — it never writes
//! `show_context_menu` itself.

use crate::core::events::MenuEvent;
use crate::core::settings::ColorScheme;
use crate::menu::state::MenuState;
use tracing::warn;

/// Menu popup width in points
const MENU_WIDTH: f32 = 220.0;

/// Height of a single menu item in points
const MENU_ITEM_HEIGHT: f32 = 28.0;

/// Seconds after opening during which outside clicks are ignored, so the
/// click that opened the menu cannot immediately dismiss it
const OPEN_GRACE_SECONDS: f64 = 0.15;

/// Render-side bookkeeping for one menu popup.
///
/// Positioning is the embedding context's responsibility: call
/// [`ContextMenuHost::open_at`] with wherever the menu should appear (the
/// render pass only clamps it to the screen). This struct is not part of the
/// state contract — `MenuState` stays purely visibility/title/actions.
#[derive(Debug, Default)]
pub struct ContextMenuHost {
    /// Caller-supplied popup position
    pub position: egui::Pos2,
    /// Time the popup was first rendered after opening (0.0 = not yet)
    opened_time: f64,
}

impl ContextMenuHost {
    /// Create a host with a default position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the next popup should appear and restart the open grace
    /// period. Call this when setting `show_context_menu = true`.
    pub fn open_at(&mut self, position: egui::Pos2) {
        self.position = position;
        self.opened_time = 0.0;
    }
}

/// Render the context menu and return the events it produced.
///
/// Returns an empty vector without drawing anything when
/// `menu.show_context_menu` is false. A click on an action invokes its
/// callback synchronously, exactly once, and the menu stays visible —
/// close-after-select is the caller's policy, applied on
/// [`MenuEvent::ActionInvoked`]. A primary click outside the popup yields
/// [`MenuEvent::DismissRequested`].
pub fn render_context_menu(
    ctx: &egui::Context,
    host: &mut ContextMenuHost,
    menu: &mut MenuState,
    scheme: ColorScheme,
) -> Vec<MenuEvent> {
    let mut events = Vec::new();

    if !menu.show_context_menu {
        // A hidden frame restarts the grace period, so a later reopen is
        // covered even when the owner never calls `open_at`.
        host.opened_time = 0.0;
        return events;
    }

    let current_time = ctx.input(|i| i.time);

    // First render after opening: start the grace period
    if host.opened_time == 0.0 {
        host.opened_time = current_time;
    }
    let can_close = current_time > host.opened_time + OPEN_GRACE_SECONDS;

    // Clamp the caller-supplied position to the window bounds
    let screen_rect = ctx.screen_rect();
    let header_height = if menu.title.is_empty() { 0.0 } else { 24.0 };
    let menu_height = header_height + menu.context_actions.len() as f32 * MENU_ITEM_HEIGHT + 24.0;

    let mut pos = host.position;
    if pos.x + MENU_WIDTH > screen_rect.max.x {
        pos.x = screen_rect.max.x - MENU_WIDTH - 10.0;
    }
    if pos.y + menu_height > screen_rect.max.y {
        pos.y = screen_rect.max.y - menu_height - 10.0;
    }

    let menu_response = egui::Area::new(egui::Id::new("popmenu_context_menu"))
        .fixed_pos(pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(scheme.popup_background())
                .stroke(egui::Stroke::new(1.0, scheme.popup_border()))
                .rounding(6.0)
                .inner_margin(egui::Margin::symmetric(6.0, 6.0))
                .show(ui, |ui| {
                    ui.set_width(MENU_WIDTH - 12.0);
                    ui.style_mut().spacing.item_spacing = egui::vec2(0.0, 2.0);
                    ui.style_mut().visuals.widgets.hovered.bg_fill = scheme.selection_background();

                    if !menu.title.is_empty() {
                        ui.label(
                            egui::RichText::new(&menu.title)
                                .size(12.0)
                                .color(scheme.secondary_foreground()),
                        );
                        ui.add_space(2.0);
                        ui.separator();
                        ui.add_space(2.0);
                    }

                    // Insertion order is display order: no dedup, no sort.
                    // An empty list renders an empty body.
                    for (index, action) in menu.context_actions.iter_mut().enumerate() {
                        let btn = egui::Button::new(
                            egui::RichText::new(action.name())
                                .size(13.0)
                                .color(scheme.foreground()),
                        )
                        .fill(egui::Color32::TRANSPARENT)
                        .min_size(egui::vec2(MENU_WIDTH - 12.0, MENU_ITEM_HEIGHT));

                        if ui.add(btn).clicked() {
                            let name = action.name().to_string();
                            match action.invoke() {
                                Ok(()) => events.push(MenuEvent::ActionInvoked { index, name }),
                                Err(error) => {
                                    warn!("Failed to invoke menu action '{}': {}", name, error);
                                    events.push(MenuEvent::InvocationFailed { index, name, error });
                                }
                            }
                        }
                    }
                });
        });

    // Primary click outside the popup requests dismissal (after the grace
    // period). The flag itself is the owner's to flip.
    if can_close {
        let menu_rect = menu_response.response.rect;
        let clicked_outside = ctx.input(|i| {
            i.pointer.button_clicked(egui::PointerButton::Primary)
                && i.pointer
                    .interact_pos()
                    .map(|p| !menu_rect.contains(p))
                    .unwrap_or(false)
        });

        if clicked_outside {
            host.opened_time = 0.0;
            events.push(MenuEvent::DismissRequested);
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::action::{InvocationError, MenuAction};
    use crate::menu::sink::RecordingSink;
    use std::cell::Cell;
    use std::rc::Rc;

    // Geometry used by the click tests, derived from MENU_WIDTH /
    // MENU_ITEM_HEIGHT and the popup's 6pt inner margin: with the popup
    // opened at (10, 10) and no title, item 0 spans y = 16..44 and item 1
    // spans y = 46..74 (2pt item spacing), both x = 16..224.
    const MENU_POS: egui::Pos2 = egui::pos2(10.0, 10.0);
    const FIRST_ITEM: egui::Pos2 = egui::pos2(120.0, 30.0);
    const SECOND_ITEM: egui::Pos2 = egui::pos2(120.0, 60.0);
    const OUTSIDE: egui::Pos2 = egui::pos2(500.0, 500.0);

    /// Drive one headless frame and collect the events the render pass
    /// produced.
    fn run_frame(
        ctx: &egui::Context,
        host: &mut ContextMenuHost,
        menu: &mut MenuState,
        time: f64,
        input_events: Vec<egui::Event>,
    ) -> (Vec<MenuEvent>, egui::FullOutput) {
        let input = egui::RawInput {
            time: Some(time),
            events: input_events,
            ..Default::default()
        };
        let mut events = Vec::new();
        let output = ctx.run(input, |ctx| {
            events = render_context_menu(ctx, host, menu, ColorScheme::Dark);
        });
        (events, output)
    }

    /// A full primary click (move, press, release) at one position.
    fn click_at(pos: egui::Pos2) -> Vec<egui::Event> {
        vec![
            egui::Event::PointerMoved(pos),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::default(),
            },
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::default(),
            },
        ]
    }

    fn copy_delete_menu() -> (MenuState, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let copy_calls = Rc::new(Cell::new(0u32));
        let delete_calls = Rc::new(Cell::new(0u32));
        let f = Rc::clone(&copy_calls);
        let g = Rc::clone(&delete_calls);

        let menu = MenuState::with_actions(
            vec![
                MenuAction::new("Copy", move || f.set(f.get() + 1)),
                MenuAction::new("Delete", move || g.set(g.get() + 1)),
            ],
            RecordingSink::shared(),
        );
        (menu, copy_calls, delete_calls)
    }

    #[test]
    fn test_hidden_menu_draws_nothing_and_returns_no_events() {
        let ctx = egui::Context::default();
        let mut host = ContextMenuHost::new();
        let mut menu = MenuState::new(RecordingSink::shared());

        let (events, output) = run_frame(&ctx, &mut host, &mut menu, 0.1, Vec::new());

        assert!(events.is_empty());
        assert!(output.shapes.is_empty());
    }

    #[test]
    fn test_click_invokes_action_and_menu_stays_visible() {
        let ctx = egui::Context::default();
        let mut host = ContextMenuHost::new();
        let (mut menu, copy_calls, delete_calls) = copy_delete_menu();

        host.open_at(MENU_POS);
        menu.set_visible(true);

        // First frame lays the popup out; no pointer input, no events.
        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 0.1, Vec::new());
        assert!(events.is_empty());

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 0.2, click_at(SECOND_ITEM));
        assert_eq!(
            events,
            vec![MenuEvent::ActionInvoked {
                index: 1,
                name: "Delete".to_string(),
            }]
        );
        assert_eq!(copy_calls.get(), 0);
        assert_eq!(delete_calls.get(), 1);
        assert!(menu.show_context_menu, "selection must not implicitly close");
    }

    #[test]
    fn test_click_on_malformed_action_reports_failure() {
        let ctx = egui::Context::default();
        let mut host = ContextMenuHost::new();
        let mut menu = MenuState::with_actions(
            vec![MenuAction::placeholder("Broken")],
            RecordingSink::shared(),
        );

        host.open_at(MENU_POS);
        menu.set_visible(true);

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 0.1, Vec::new());
        assert!(events.is_empty());

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 0.2, click_at(FIRST_ITEM));
        assert_eq!(
            events,
            vec![MenuEvent::InvocationFailed {
                index: 0,
                name: "Broken".to_string(),
                error: InvocationError::MissingCallback {
                    name: "Broken".to_string(),
                },
            }]
        );
    }

    #[test]
    fn test_outside_click_requests_dismiss_after_grace() {
        let ctx = egui::Context::default();
        let mut host = ContextMenuHost::new();
        let (mut menu, ..) = copy_delete_menu();

        host.open_at(MENU_POS);
        menu.set_visible(true);

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 0.5, Vec::new());
        assert!(events.is_empty());

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 1.0, click_at(OUTSIDE));
        assert_eq!(events, vec![MenuEvent::DismissRequested]);

        // The flag itself is the owner's to flip.
        assert!(menu.show_context_menu);
    }

    #[test]
    fn test_outside_click_within_grace_is_ignored() {
        let ctx = egui::Context::default();
        let mut host = ContextMenuHost::new();
        let (mut menu, ..) = copy_delete_menu();

        host.open_at(MENU_POS);
        menu.set_visible(true);

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 0.5, Vec::new());
        assert!(events.is_empty());

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 0.55, click_at(OUTSIDE));
        assert!(events.is_empty());
    }

    #[test]
    fn test_reopen_without_open_at_restarts_grace() {
        let ctx = egui::Context::default();
        let mut host = ContextMenuHost::new();
        let (mut menu, ..) = copy_delete_menu();

        host.open_at(MENU_POS);
        menu.set_visible(true);
        let _ = run_frame(&ctx, &mut host, &mut menu, 0.5, Vec::new());

        // Owner hides the menu (e.g. close-on-select policy) and later
        // reopens it without calling open_at again.
        menu.set_visible(false);
        let _ = run_frame(&ctx, &mut host, &mut menu, 2.0, Vec::new());
        menu.set_visible(true);
        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 10.0, Vec::new());
        assert!(events.is_empty());

        // Still inside the fresh grace period: the opening click cannot
        // dismiss the reopened menu.
        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 10.05, click_at(OUTSIDE));
        assert!(events.is_empty());

        let (events, _) = run_frame(&ctx, &mut host, &mut menu, 10.3, click_at(OUTSIDE));
        assert_eq!(events, vec![MenuEvent::DismissRequested]);
    }
}
