//! Demo embedding application
//!
//! A small eframe app showing how an embedding context drives the menu:
//! it owns the `MenuState`, decides where the popup appears, supplies the
//! context actions, and applies the events the render pass returns.

use crate::core::events::MenuEvent;
use crate::core::settings::{ColorScheme, Settings};
use crate::menu::action::MenuAction;
use crate::menu::sink::TracingSink;
use crate::menu::state::MenuState;
use super::context_menu::{render_context_menu, ContextMenuHost};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{error, info};

/// Demo application state
pub struct DemoApp {
    /// Menu state, owned here (the embedding context)
    menu: MenuState,
    /// Render-side bookkeeping (popup position)
    host: ContextMenuHost,
    /// Demo settings (color scheme, close-on-select policy)
    settings: Settings,
    /// How many times "Copy" was selected
    copied: Rc<Cell<usize>>,
    /// How many times "Delete" was selected
    deleted: Rc<Cell<usize>>,
    /// Whether "Log out" was selected
    logged_out: Rc<Cell<bool>>,
    /// Last event reported by the render pass, for display
    last_event: Option<String>,
}

impl DemoApp {
    /// Create the demo app with its context actions bound.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let copied = Rc::new(Cell::new(0));
        let deleted = Rc::new(Cell::new(0));
        let logged_out = Rc::new(Cell::new(false));

        let mut menu = MenuState::with_actions(
            Self::context_actions(&copied, &deleted, &logged_out),
            TracingSink::shared(),
        );
        menu.set_title("Item Menu");

        Self {
            menu,
            host: ContextMenuHost::new(),
            settings,
            copied,
            deleted,
            logged_out,
            last_event: None,
        }
    }

    /// Build the context actions for this demo. Each callback mutates shared
    /// demo state; the component only ever invokes them.
    fn context_actions(
        copied: &Rc<Cell<usize>>,
        deleted: &Rc<Cell<usize>>,
        logged_out: &Rc<Cell<bool>>,
    ) -> Vec<MenuAction> {
        let copy_count = Rc::clone(copied);
        let delete_count = Rc::clone(deleted);
        let logout_flag = Rc::clone(logged_out);

        vec![
            MenuAction::new("Copy", move || copy_count.set(copy_count.get() + 1)),
            MenuAction::new("Delete", move || delete_count.set(delete_count.get() + 1))
                .with_class("danger"),
            MenuAction::new("Log out", move || logout_flag.set(true)).with_class("logout"),
        ]
    }

    fn settings_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Color scheme:");
            egui::ComboBox::from_id_salt("color_scheme")
                .selected_text(self.settings.color_scheme.display_name())
                .show_ui(ui, |ui| {
                    for scheme in ColorScheme::all() {
                        ui.selectable_value(
                            &mut self.settings.color_scheme,
                            *scheme,
                            scheme.display_name(),
                        );
                    }
                });

            ui.checkbox(&mut self.settings.close_on_select, "Close menu on select");

            if ui.button("Save settings").clicked() {
                if let Err(e) = self.settings.save() {
                    error!("Failed to save settings: {e:#}");
                }
            }
        });
    }

    /// Apply the events reported by the render pass.
    fn handle_menu_events(&mut self, events: Vec<MenuEvent>) {
        for event in events {
            match &event {
                MenuEvent::ActionInvoked { name, .. } => {
                    info!("Menu action invoked: {name}");
                    if self.settings.close_on_select {
                        self.menu.set_visible(false);
                    }
                }
                MenuEvent::InvocationFailed { name, error, .. } => {
                    error!("Menu action '{name}' failed: {error}");
                }
                MenuEvent::DismissRequested => {
                    self.menu.set_visible(false);
                }
            }
            self.last_event = Some(format!("{event:?}"));
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let scheme = self.settings.color_scheme;

        egui::TopBottomPanel::top("settings_bar").show(ctx, |ui| {
            self.settings_bar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(scheme.background()))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Right-click anywhere in this panel to open the menu.")
                        .color(scheme.foreground()),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Copied: {}   Deleted: {}   Logged out: {}",
                        self.copied.get(),
                        self.deleted.get(),
                        self.logged_out.get()
                    ))
                    .color(scheme.foreground()),
                );
                if let Some(last) = &self.last_event {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!("Last event: {last}"))
                            .color(scheme.secondary_foreground()),
                    );
                }

                // The embedding context decides when and where the menu
                // appears: right-click opens it at the pointer.
                let response = ui.interact(
                    ui.max_rect(),
                    egui::Id::new("demo_surface"),
                    egui::Sense::click(),
                );
                if response.secondary_clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.host.open_at(pos);
                        self.menu.set_visible(true);
                    }
                }
            });

        let events = render_context_menu(ctx, &mut self.host, &mut self.menu, scheme);
        self.handle_menu_events(events);
    }
}
