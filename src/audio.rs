// src/audio.rs

//! Fire-and-forget sound playback for games.
//!
//! Playback failures are logged and swallowed; a game never sees them.

use crate::config::AudioConfig;
use crate::error::EngineError;
use anyhow::{Context, Result};
use log::{trace, warn};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// The named sounds a game can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Collision,
    Score,
    Lose,
}

impl Sound {
    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Collision => "collision.wav",
            Sound::Score => "count.wav",
            Sound::Lose => "lose.wav",
        }
    }
}

/// Something that can play a named sound.
pub trait SoundPlayer: Send {
    fn play(&self, sound: Sound);
}

/// Discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSoundPlayer;

impl SoundPlayer for SilentSoundPlayer {
    fn play(&self, sound: Sound) {
        trace!("Audio: (silent) {:?}", sound);
    }
}

/// Plays sounds by spawning an external player program on the sound file.
#[derive(Debug, Clone)]
pub struct CommandSoundPlayer {
    program: String,
    assets_dir: PathBuf,
}

impl CommandSoundPlayer {
    pub fn new(program: impl Into<String>, assets_dir: impl Into<PathBuf>) -> Self {
        CommandSoundPlayer {
            program: program.into(),
            assets_dir: assets_dir.into(),
        }
    }

    fn try_play(&self, sound: Sound) -> Result<()> {
        let path = self.assets_dir.join(sound.file_name());
        if !path.is_file() {
            return Err(EngineError::ResourceMissing(path.display().to_string()).into());
        }
        Command::new(&self.program)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start '{}'", self.program))?;
        Ok(())
    }
}

impl SoundPlayer for CommandSoundPlayer {
    fn play(&self, sound: Sound) {
        if let Err(e) = self.try_play(sound) {
            warn!("Failed to play sound '{}': {:#}", sound.file_name(), e);
        }
    }
}

/// Builds the player described by `config`: silent unless a player program is set.
pub fn player_from_config(config: &AudioConfig) -> Box<dyn SoundPlayer> {
    match &config.player {
        Some(program) => Box::new(CommandSoundPlayer::new(program.clone(), config.assets_dir.clone())),
        None => Box::new(SilentSoundPlayer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn sound_file_names() {
        assert_eq!(Sound::Collision.file_name(), "collision.wav");
        assert_eq!(Sound::Score.file_name(), "count.wav");
        assert_eq!(Sound::Lose.file_name(), "lose.wav");
    }

    #[test]
    fn missing_asset_is_reported_not_raised() {
        let player = CommandSoundPlayer::new("true", "/nonexistent/sounds");
        let err = player.try_play(Sound::Score).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EngineError>(),
            Some(EngineError::ResourceMissing(_))
        ));
        // The public entry point swallows the failure.
        player.play(Sound::Score);
    }

    #[test]
    fn config_without_player_is_silent() {
        let player = player_from_config(&AudioConfig::default());
        player.play(Sound::Lose);
    }
}
