pub mod audio_specific_config;
