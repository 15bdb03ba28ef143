//! Invitation content resource.
//!
//! All the text and asset references the screens render: party info, the
//! attraction and experience lists, the per-screen transition sticker sets,
//! and the floating background items. The compiled-in defaults describe the
//! actual party; an optional `assets/invite.json` file can override the whole
//! record (serde), so the invite can be re-themed without recompiling.
//!
//! The core treats this record as read-only input and performs no validation
//! beyond the sticker map being keyed by [`Screen`] values, which the closed
//! enum already guarantees.

use crate::resources::navigation::Screen;
use bevy_ecs::prelude::Resource;
use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One live attraction: display name plus the texture key of its icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub icon: String,
}

/// One entry on the experiences clipboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub desc: String,
}

/// One floating background decoration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingItem {
    /// Texture key, also the file stem under `assets/textures/`.
    pub tex: String,
    /// Uniform scale applied to the sprite.
    pub scale: f32,
    /// Seconds for one full bob cycle.
    pub speed: f32,
    /// Stagger offset in seconds so the items don't bob in lockstep.
    pub delay: f32,
}

/// Static invitation content, inserted as a resource at startup.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct InviteContent {
    pub title: String,
    pub theme: String,
    pub dress_code: String,
    pub price_note: String,
    pub address: String,
    pub city: String,
    pub date_line: String,
    pub time_line: String,
    pub group_link: String,
    pub attractions: Vec<Attraction>,
    pub experiences: Vec<Experience>,
    /// Screens mapped to the sticker images revealed while entering them.
    /// Screens without an entry get no transition burst.
    pub stickers: FxHashMap<Screen, Vec<String>>,
    pub floating_items: Vec<FloatingItem>,
    /// Path of the looping music track, relative to the working directory.
    pub music_path: String,
}

impl InviteContent {
    /// The compiled-in invitation.
    pub fn new() -> Self {
        let mut stickers: FxHashMap<Screen, Vec<String>> = FxHashMap::default();
        stickers.insert(
            Screen::Theme,
            vec!["sticker_boteco".into(), "sticker_fubanga".into()],
        );
        stickers.insert(
            Screen::Attractions,
            vec![
                "sticker_keyboard".into(),
                "sticker_magician".into(),
                "sticker_fireworks".into(),
            ],
        );
        stickers.insert(
            Screen::Food,
            vec![
                "sticker_barbecue".into(),
                "sticker_cachaca".into(),
                "sticker_hotdog".into(),
            ],
        );
        stickers.insert(
            Screen::Experiences,
            vec![
                "sticker_shark".into(),
                "sticker_gold".into(),
                "sticker_target".into(),
                "sticker_fame".into(),
            ],
        );
        stickers.insert(Screen::Location, vec!["sticker_praia_mole".into()]);

        InviteContent {
            title: "BOTECO DO KAINÃ".into(),
            theme: "Véio e Fubanga de Boteco".into(),
            dress_code: "Obrigatório vir vestido a caráter!!! \
                         Terá prêmios para os mais dedicados na vestimenta."
                .into(),
            price_note: "Vou ter que cobrar R$40 pra viabilizar o rolê \
                         (atrações, comida e bebida... TÁ VALENDO!)"
                .into(),
            address: "Rodovia Jornalista Manoel de Menezes 634, casa 5".into(),
            city: "Praia Mole, Florianópolis, SC".into(),
            date_line: "06/12 Sábado".into(),
            time_line: "Começa as 16h e sabe-se lá quando termina...".into(),
            group_link: "https://chat.whatsapp.com/ILY3Mm7KhJIBdxF5cQiPHS".into(),
            attractions: vec![
                Attraction {
                    name: "Judivan do Teclado (18h - 20h)".into(),
                    icon: "icon_music".into(),
                },
                Attraction {
                    name: "Show de Mágico (21h)".into(),
                    icon: "icon_star".into(),
                },
                Attraction {
                    name: "Espetáculo Pirotécnico (22h)".into(),
                    icon: "icon_spark".into(),
                },
            ],
            experiences: vec![
                Experience {
                    title: "SHARK TANK DE IDÉIAS LIXO".into(),
                    desc: "Prepara o seu pitch, com slide e tudo, e vamo ver \
                           quem investe na sua idéia bosta"
                        .into(),
                },
                Experience {
                    title: "Baseados enrolados em folha de ouro".into(),
                    desc: "Um clássico desde 2021".into(),
                },
                Experience {
                    title: "Tiro ao alvo com premiações".into(),
                    desc: "Acerte e ganhe (ou não)".into(),
                },
                Experience {
                    title: "Subcelebridades me dando parabéns".into(),
                    desc: "O auge da fama".into(),
                },
            ],
            stickers,
            floating_items: vec![
                FloatingItem {
                    tex: "float_beer".into(),
                    scale: 1.0,
                    speed: 4.0,
                    delay: 0.0,
                },
                FloatingItem {
                    tex: "float_chair".into(),
                    scale: 0.8,
                    speed: 6.0,
                    delay: 1.0,
                },
                FloatingItem {
                    tex: "float_tv".into(),
                    scale: 0.7,
                    speed: 5.0,
                    delay: 2.0,
                },
                FloatingItem {
                    tex: "float_slipper".into(),
                    scale: 0.8,
                    speed: 7.0,
                    delay: 0.5,
                },
                FloatingItem {
                    tex: "float_radio".into(),
                    scale: 0.6,
                    speed: 8.0,
                    delay: 3.0,
                },
                FloatingItem {
                    tex: "float_cigarette".into(),
                    scale: 0.5,
                    speed: 5.0,
                    delay: 1.5,
                },
                FloatingItem {
                    tex: "float_crate".into(),
                    scale: 1.0,
                    speed: 5.0,
                    delay: 4.0,
                },
                FloatingItem {
                    tex: "float_flag".into(),
                    scale: 0.6,
                    speed: 9.0,
                    delay: 2.0,
                },
            ],
            music_path: "./assets/audio/boteco_fm.ogg".into(),
        }
    }

    /// Load content from a JSON file, falling back to the compiled defaults
    /// when the file is missing or malformed. A broken override never stops
    /// the invite from starting.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<InviteContent>(&text) {
                Ok(content) => {
                    info!("Loaded invite content from {}", path.display());
                    content
                }
                Err(e) => {
                    warn!(
                        "Ignoring invite content at {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    /// Sticker texture keys for a screen; `None` for screens without a burst.
    pub fn stickers_for(&self, screen: Screen) -> Option<&[String]> {
        self.stickers
            .get(&screen)
            .map(|v| v.as_slice())
            .filter(|v| !v.is_empty())
    }
}

impl Default for InviteContent {
    fn default() -> Self {
        Self::new()
    }
}
