use bevy::ecs::relationship::RelatedSpawnerCommands;
use bevy::prelude::*;

use super::UiConfig;
use super::entities::{
    DialogBody, DialogButton, DialogRoot, HexDialog, Notice, NoticeText, PlayerBanner, attack,
};
use crate::interaction::Selection;
use crate::map::HexMap;
use crate::session::PlayerSession;

// ── Startup ─────────────────────────────────────────────────────────

/// Player banner and notice line in the top-left corner.
pub fn spawn_hud(mut commands: Commands, session: Res<PlayerSession>, cfg: Res<UiConfig>) {
    commands
        .spawn((
            Name::new("Hud"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            Interaction::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(session.banner()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(cfg.text_color),
                PlayerBanner,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(cfg.text_color),
                NoticeText,
            ));
        });
}

/// Hidden dialog panel with a text body and the Attack / Close buttons.
pub fn spawn_dialog(mut commands: Commands, cfg: Res<UiConfig>) {
    commands
        .spawn((
            Name::new("HexDialog"),
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                top: Val::Px(80.0),
                right: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
            BackgroundColor(cfg.panel_color),
            // Lets the pointer tracker tell that the cursor is over the panel.
            Interaction::default(),
            DialogRoot,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(cfg.text_color),
                DialogBody,
            ));
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(10.0),
                    ..default()
                })
                .with_children(|row| {
                    for button in [DialogButton::Attack, DialogButton::Close] {
                        spawn_button(row, button, &cfg);
                    }
                });
        });
}

fn spawn_button(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    button: DialogButton,
    cfg: &UiConfig,
) {
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.18, 0.2, 0.3)),
            button,
        ))
        .with_children(|b| {
            b.spawn((
                Text::new(button.label()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(cfg.text_color),
            ));
        });
}

// ── Update ──────────────────────────────────────────────────────────

/// Attack surfaces the placeholder message and closes; Close only hides.
pub fn handle_dialog_buttons(
    buttons: Query<(&Interaction, &DialogButton), Changed<Interaction>>,
    selection: Res<Selection>,
    map: Res<HexMap>,
    mut dialog: ResMut<HexDialog>,
    mut notice: ResMut<Notice>,
    cfg: Res<UiConfig>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            DialogButton::Attack => {
                if let Some(message) = attack(&selection, &map, &mut dialog) {
                    info!("{message}");
                    notice.show(message, cfg.notice_seconds);
                }
            }
            DialogButton::Close => dialog.close(),
        }
    }
}

/// Mirrors [`HexDialog`] onto the panel's visibility and body text.
pub fn sync_dialog(
    dialog: Res<HexDialog>,
    mut roots: Query<&mut Node, With<DialogRoot>>,
    mut bodies: Query<&mut Text, With<DialogBody>>,
) {
    for mut node in &mut roots {
        node.display = if dialog.is_visible() {
            Display::Flex
        } else {
            Display::None
        };
    }
    for mut text in &mut bodies {
        text.0 = dialog.body().to_owned();
    }
}

/// Shows the current notice and clears it once it expires.
pub fn tick_notice(
    time: Res<Time>,
    mut notice: ResMut<Notice>,
    mut texts: Query<&mut Text, With<NoticeText>>,
) {
    let expired = notice.bypass_change_detection().tick(time.delta_secs());
    if !expired && !notice.is_changed() {
        return;
    }
    for mut text in &mut texts {
        text.0 = notice.text.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Difficulty, HexRecord};

    fn app_with_selected(id: &str) -> App {
        let map = HexMap::new(vec![
            HexRecord::new("3", 0, 0).with_difficulty(Difficulty::Easy),
            HexRecord::new("4", 1, 0).with_difficulty(Difficulty::Medium),
        ]);
        let mut dialog = HexDialog::default();
        if let Some(hex) = map.get(id) {
            dialog.open(hex);
        }
        let mut selection = Selection::default();
        selection.select(id);

        let mut app = App::new();
        app.insert_resource(map)
            .insert_resource(dialog)
            .insert_resource(selection)
            .init_resource::<Notice>()
            .insert_resource(UiConfig::default())
            .add_systems(Update, handle_dialog_buttons);
        app
    }

    #[test]
    fn attack_button_posts_notice_and_closes() {
        let mut app = app_with_selected("4");
        app.world_mut().spawn((Interaction::Pressed, DialogButton::Attack));
        app.update();

        assert!(!app.world().resource::<HexDialog>().is_visible());
        assert_eq!(
            app.world().resource::<Notice>().text,
            "Solve a medium problem to capture Hex 4!"
        );
    }

    #[test]
    fn close_button_hides_and_keeps_selection() {
        let mut app = app_with_selected("3");
        app.world_mut().spawn((Interaction::Pressed, DialogButton::Close));
        app.update();

        assert!(!app.world().resource::<HexDialog>().is_visible());
        assert!(app.world().resource::<Notice>().text.is_empty());
        assert_eq!(app.world().resource::<Selection>().id(), Some("3"));
    }

    #[test]
    fn hovering_a_button_does_nothing() {
        let mut app = app_with_selected("3");
        app.world_mut().spawn((Interaction::Hovered, DialogButton::Attack));
        app.update();

        assert!(app.world().resource::<HexDialog>().is_visible());
        assert!(app.world().resource::<Notice>().text.is_empty());
    }

    #[test]
    fn sync_shows_panel_with_hex_details() {
        let mut app = app_with_selected("3");
        app.add_systems(Update, sync_dialog);
        let root = app
            .world_mut()
            .spawn((
                Node {
                    display: Display::None,
                    ..default()
                },
                DialogRoot,
            ))
            .id();
        let body = app.world_mut().spawn((Text::new(""), DialogBody)).id();
        app.update();

        let world = app.world();
        assert_eq!(world.get::<Node>(root).map(|n| n.display), Some(Display::Flex));
        assert_eq!(
            world.get::<Text>(body).map(|t| t.0.as_str()),
            Some("Hex ID: 3\nOwner: Neutral\nDifficulty: easy")
        );
    }

    #[test]
    fn hud_root_catches_pointer_presses() {
        let mut app = App::new();
        app.insert_resource(PlayerSession {
            username: "ada".into(),
            team: "blue".into(),
        })
        .insert_resource(UiConfig::default())
        .add_systems(Startup, spawn_hud);
        app.update();

        let world = app.world_mut();
        let mut banners = world.query_filtered::<(&ChildOf, &Text), With<PlayerBanner>>();
        let (parent, text) = banners.single(world).unwrap();
        assert_eq!(text.0, "ada · Team blue");
        assert_eq!(world.get::<Interaction>(parent.parent()), Some(&Interaction::None));
    }
}
