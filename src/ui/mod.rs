//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the EduHack page viewer:
//! - Header panel (title, navigation links, search/theme/menu toggles, file controls)
//! - Mobile menu (collapsible navigation on narrow windows)
//! - Page panel (content tree, scroll spy measurements, smooth scrolling)
//! - Countdown view (days/hours/minutes/seconds cards)
//! - Particles layer (floating background decoration)
//! - Search panel (query field and result list)
//! - Status bar (page metadata display)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod mobile_menu;
pub mod page_panel;
pub mod countdown_view;
pub mod particles_layer;
pub mod search_panel;
pub mod status_bar;
pub mod panel_manager;
