//! Text overlays pinned to the window edges.
//!
//! Every HUD entity carries a [`HudAnchor`] so the layout survives window
//! resizes without respawning anything.

use crate::game::{GameSession, LevelTracker, Phase};
use bevy::prelude::*;
use bevy::sprite::Anchor;

const HUD_Z: f32 = 10.0;
const HUD_MARGIN: f32 = 20.0;
const HUD_FONT_SIZE: f32 = 24.0;
const HINT_FONT_SIZE: f32 = 16.0;
const BANNER_FONT_SIZE: f32 = 72.0;
const RESTART_FONT_SIZE: f32 = 18.0;

const BANNER_COLOR: Color = Color::srgb(0.306, 0.800, 0.639);
const HINT_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.5);

const RESTART_INSET: Vec2 = Vec2::new(-HUD_MARGIN, -HUD_MARGIN);
const RESTART_HIT_SIZE: Vec2 = Vec2::new(190.0, 48.0);
const RESTART_HIT_PAD: Vec2 = Vec2::new(10.0, 10.0);

/// Pins an entity to a window-relative point.
///
/// `horizontal` and `vertical` are window fractions in [-1, 1] where
/// (1, 1) is the top-right corner; `inset` nudges in logical pixels.
#[derive(Component, Debug, Clone, Copy)]
pub struct HudAnchor {
    pub horizontal: f32,
    pub vertical: f32,
    pub inset: Vec2,
}

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct MovesText;

#[derive(Component)]
pub struct BannerText;

#[derive(Component)]
pub struct RestartButton;

#[derive(Component)]
pub struct HintText;

/// Clickable area around the restart label, in world coordinates
pub fn restart_hit_rect(window: &Window) -> Rect {
    let half = Vec2::new(window.width(), window.height()) * 0.5;
    let corner = half + RESTART_INSET + RESTART_HIT_PAD;
    Rect::from_corners(corner, corner - RESTART_HIT_SIZE)
}

/// System: spawn the level counter, move counter, hints, banner and restart label
pub fn spawn_hud(mut commands: Commands) {
    info!("🎨 Spawning HUD overlays...");

    commands.spawn((
        LevelText,
        HudAnchor {
            horizontal: -1.0,
            vertical: 1.0,
            inset: Vec2::new(HUD_MARGIN, -HUD_MARGIN),
        },
        Text2d::new("Level 1/1"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Anchor::TOP_LEFT,
        Name::new("Level Text"),
    ));

    commands.spawn((
        MovesText,
        HudAnchor {
            horizontal: -1.0,
            vertical: 1.0,
            inset: Vec2::new(HUD_MARGIN, -HUD_MARGIN - HUD_FONT_SIZE - 8.0),
        },
        Text2d::new("Moves: 0"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Anchor::TOP_LEFT,
        Name::new("Moves Text"),
    ));

    commands.spawn((
        HintText,
        HudAnchor {
            horizontal: -1.0,
            vertical: -1.0,
            inset: Vec2::new(HUD_MARGIN, 56.0),
        },
        Text2d::new("Left Click: select  |  Right Click: transfer"),
        TextFont {
            font_size: HINT_FONT_SIZE,
            ..default()
        },
        TextColor(HINT_COLOR),
        Anchor::BOTTOM_LEFT,
        Name::new("Controls Hint"),
    ));

    commands.spawn((
        HintText,
        HudAnchor {
            horizontal: -1.0,
            vertical: -1.0,
            inset: Vec2::new(HUD_MARGIN, 32.0),
        },
        Text2d::new("Goal: Make all nodes green"),
        TextFont {
            font_size: HINT_FONT_SIZE,
            ..default()
        },
        TextColor(HINT_COLOR),
        Anchor::BOTTOM_LEFT,
        Name::new("Goal Hint"),
    ));

    // Banner sits at 70% of the half-height, invisible until a level is solved
    commands.spawn((
        BannerText,
        HudAnchor {
            horizontal: 0.0,
            vertical: 0.7,
            inset: Vec2::ZERO,
        },
        Text2d::new(""),
        TextFont {
            font_size: BANNER_FONT_SIZE,
            ..default()
        },
        TextColor(BANNER_COLOR.with_alpha(0.0)),
        Anchor::CENTER,
        Name::new("Banner Text"),
    ));

    commands.spawn((
        RestartButton,
        HudAnchor {
            horizontal: 1.0,
            vertical: 1.0,
            inset: RESTART_INSET,
        },
        Text2d::new("\u{21bb} Restart Level"),
        TextFont {
            font_size: RESTART_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE.with_alpha(0.8)),
        Anchor::TOP_RIGHT,
        Name::new("Restart Button"),
    ));
}

/// System: keep anchored entities glued to their window corner
pub fn position_hud(
    windows: Query<&Window>,
    mut anchored: Query<(&HudAnchor, &mut Transform)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let half = Vec2::new(window.width(), window.height()) * 0.5;
    for (anchor, mut transform) in &mut anchored {
        let target = half * Vec2::new(anchor.horizontal, anchor.vertical) + anchor.inset;
        transform.translation = target.extend(HUD_Z);
    }
}

/// System: rewrite the level counter when progression moves
pub fn update_level_text(
    tracker: Res<LevelTracker>,
    mut texts: Query<&mut Text2d, With<LevelText>>,
) {
    if !tracker.is_changed() {
        return;
    }

    for mut text in &mut texts {
        text.0 = format!("Level {}/{}", tracker.level_number(), tracker.level_count());
    }
}

/// System: rewrite the move counter when the session changes
pub fn update_moves_text(
    session: Res<GameSession>,
    mut texts: Query<&mut Text2d, With<MovesText>>,
) {
    if !session.is_changed() {
        return;
    }

    for mut text in &mut texts {
        text.0 = format!("Moves: {}", session.state().moves());
    }
}

/// System: fade the celebration banner in while the session celebrates
pub fn update_banner(
    session: Res<GameSession>,
    mut banners: Query<(&mut Text2d, &mut TextColor), With<BannerText>>,
) {
    if !session.is_changed() {
        return;
    }

    let Ok((mut text, mut color)) = banners.single_mut() else {
        return;
    };

    let label = match session.phase() {
        Phase::Playing => "",
        Phase::Celebrating { .. } => "Level Complete!",
        Phase::AllComplete => "All Levels Complete!",
    };
    if text.0 != label {
        text.0 = label.to_string();
    }
    color.0 = BANNER_COLOR.with_alpha(session.banner_alpha());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_hit_rect_hugs_top_right() {
        let window = Window {
            resolution: bevy::window::WindowResolution::new(800, 600),
            ..default()
        };

        let rect = restart_hit_rect(&window);
        assert!(rect.contains(Vec2::new(390.0, 290.0)));
        assert!(rect.contains(Vec2::new(260.0, 260.0)));
        assert!(!rect.contains(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains(Vec2::new(-390.0, 290.0)));
    }
}
