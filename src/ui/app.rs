//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::node_chart;
use super::theme::*;
use crate::board::{Player, Variant};
use crate::game::{GameMode, GameSession};
use crate::rules::{winning_line, Outcome};

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_chart: bool,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: GameSession) -> Self {
        Self {
            state: GameState::new(session),
            board_view: BoardView::default(),
            show_chart: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for variant in [Variant::Classic, Variant::Extended] {
                        let n = variant.size();
                        for (label, mode) in [
                            ("you play X", GameMode::PvE { human: Player::X }),
                            ("you play O", GameMode::PvE { human: Player::O }),
                            ("PvP", GameMode::PvP),
                        ] {
                            if ui.button(format!("New {}x{} ({})", n, n, label)).clicked() {
                                self.state.new_game(variant, mode);
                                ui.close_menu();
                            }
                        }
                        ui.separator();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Reset (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_chart, "Node Chart (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let n = self.state.session.variant().size();
                    let mode_text = match self.state.session.mode() {
                        GameMode::PvE { human } => format!("{}x{} PvE - You: {}", n, n, human),
                        GameMode::PvP => format!("{}x{} PvP - Hotseat", n, n),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and search stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(Color32::from_rgb(25, 27, 31)).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_search_card(ui);

                if self.show_chart {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new("NODES PER AI TURN (log10)").size(10.0).color(TEXT_MUTED));
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("with pruning").size(10.0).color(CHART_PRUNED));
                            ui.label(RichText::new("without").size(10.0).color(CHART_UNPRUNED));
                        });
                        ui.add_space(4.0);
                        node_chart::show(ui, self.state.session.node_history());
                    });
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let session = &self.state.session;
        Self::card_frame().show(ui, |ui| {
            let (headline, status, color) = match session.outcome() {
                Outcome::Won(winner) => (format!("{} WINS", winner), "Game over".to_string(), STATUS_WIN),
                Outcome::Tie => ("TIE".to_string(), "Game over".to_string(), STATUS_WIN),
                Outcome::InProgress => {
                    let status = if self.state.is_ai_thinking() {
                        let secs = self.state.ai_thinking_elapsed().map_or(0.0, |d| d.as_secs_f32());
                        format!("AI thinking... {:.2}s", secs)
                    } else if session.is_human_turn() {
                        "Your turn".to_string()
                    } else {
                        "AI to move".to_string()
                    };
                    let color = if session.is_human_turn() { STATUS_WIN } else { STATUS_WARNING };
                    (format!("{} TO MOVE", session.current_turn()), status, color)
                }
            };

            ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new(status).size(12.0).color(color));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", session.move_history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the last AI search statistics
    fn render_search_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(PANEL_HEADER)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                let config = self.state.session.engine().config();
                ui.label(RichText::new("AI SEARCH").size(10.0).color(TEXT_MUTED));
                ui.label(
                    RichText::new(format!(
                        "depth {} - pruning {} - {}",
                        config.max_depth,
                        if config.pruning { "on" } else { "off" },
                        if config.iterative { "iterative" } else { "fixed depth" },
                    ))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
                );
                ui.add_space(6.0);

                let Some(result) = self.state.session.last_ai_result() else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                if let Some(pos) = result.best_move {
                    ui.label(RichText::new(format!("played {}", pos)).size(12.0).strong().color(STATUS_WIN));
                }
                let score = if result.is_forced() {
                    format!("Score: {} (line completed within depth)", result.score)
                } else {
                    format!("Score: {}", result.score)
                };
                ui.label(RichText::new(score).size(10.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!("{:?}, depth {}", result.search_type, result.depth))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );

                if let Some(comparison) = self.state.last_comparison() {
                    ui.label(
                        RichText::new(format!(
                            "with pruning {} / without {} ({:.0}% skipped)",
                            comparison.pruned.nodes,
                            comparison.unpruned.nodes,
                            comparison.savings() * 100.0
                        ))
                        .size(10.0)
                        .color(TEXT_MUTED),
                    );
                }
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let session = &self.state.session;
                let line = winning_line(session.board());
                let accepts_input =
                    !session.is_over() && session.is_human_turn() && !self.state.is_ai_thinking();

                let clicked = self.board_view.show(
                    ui,
                    session.board(),
                    session.last_move(),
                    line.as_deref(),
                    accepts_input,
                );

                if let Some(pos) = clicked {
                    if let Err(e) = self.state.try_place(pos) {
                        self.state.message = Some(e.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (chart, undo, reset) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });
        if chart {
            self.show_chart = !self.show_chart;
        }
        if undo {
            self.state.undo();
        }
        if reset {
            self.state.reset();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
