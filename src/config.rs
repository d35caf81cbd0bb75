//! Tunables for the match board, the fireworks show and the completion screen.
//!
//! `GameConfig::default()` reproduces the stock game. With the `serde_json`
//! feature a partial JSON document can override any field; missing fields keep
//! their defaults.

use crate::error::GameError;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub board: BoardConfig,
    pub fireworks: FireworksConfig,
    pub screen: ScreenText,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            fireworks: FireworksConfig::default(),
            screen: ScreenText::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub mismatch_delay_ms: u32,
    pub completion_delay_ms: u32,
    pub reshuffle_delay_ms: u32,
    /// Shuffle assigns each card an order value in `[0, order_slots)`.
    pub order_slots: u32,
    pub card_selector: String,
    pub token_attribute: String,
    pub flip_class: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: 1500,
            completion_delay_ms: 1000,
            reshuffle_delay_ms: 500,
            order_slots: 12,
            card_selector: ".card".to_string(),
            token_attribute: "data-card".to_string(),
            flip_class: "flip".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FireworksConfig {
    pub max_fireworks: usize,
    /// Per-frame probability of launching an extra firework.
    pub spawn_chance: f64,
    pub initial_launches: usize,
    pub launch_stagger_ms: f64,
    pub trail_length: usize,
    pub firework_radius: f64,
    pub rise_speed_min: f64,
    pub rise_speed_max: f64,
    pub drift: f64,
    /// Targets land in `[target_margin, height / 2 + target_margin)`.
    pub target_margin: f64,
    pub burst_min: usize,
    pub burst_max: usize,
    pub particle_spread: f64,
    pub gravity: f64,
    pub decay_min: f64,
    pub decay_max: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub overlay: String,
    pub palette: Vec<String>,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            max_fireworks: 8,
            spawn_chance: 0.05,
            initial_launches: 3,
            launch_stagger_ms: 300.0,
            trail_length: 10,
            firework_radius: 3.0,
            rise_speed_min: 2.0,
            rise_speed_max: 4.0,
            drift: 0.8,
            target_margin: 50.0,
            burst_min: 80,
            burst_max: 130,
            particle_spread: 6.0,
            gravity: 0.05,
            decay_min: 0.01,
            decay_max: 0.025,
            radius_min: 1.0,
            radius_max: 4.0,
            overlay: "rgba(0, 0, 0, 0.1)".to_string(),
            palette: ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScreenText {
    pub title: String,
    pub message: String,
    pub replay_label: String,
}

impl Default for ScreenText {
    fn default() -> Self {
        Self {
            title: "Parabéns minha Baiana!".to_string(),
            message: "Você concluiu o jogo!".to_string(),
            replay_label: "Jogar Novamente".to_string(),
        }
    }
}

impl GameConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|err| GameError::ConfigParse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |reason: &str| Err(GameError::InvalidConfig(reason.to_string()));
        let fw = &self.fireworks;
        if self.board.order_slots == 0 {
            return invalid("board.order_slots must be positive");
        }
        if fw.palette.is_empty() {
            return invalid("fireworks.palette is empty");
        }
        if fw.burst_min >= fw.burst_max {
            return invalid("fireworks.burst_min must be below burst_max");
        }
        if !(0.0..=1.0).contains(&fw.spawn_chance) {
            return invalid("fireworks.spawn_chance must be within [0, 1]");
        }
        if fw.decay_min <= 0.0 || fw.decay_max < fw.decay_min {
            return invalid("fireworks decay range must be positive and ordered");
        }
        if fw.trail_length == 0 {
            return invalid("fireworks.trail_length must be positive");
        }
        crate::logging::parse_level(&self.log_level)?;
        Ok(())
    }
}
