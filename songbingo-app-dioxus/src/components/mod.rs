mod picker_dialog;
mod song_grid;
mod toast;
mod video_embed;

pub use picker_dialog::PickerDialog;
pub use song_grid::SongGrid;
pub use toast::ToastOverlay;
pub use video_embed::VideoEmbed;
