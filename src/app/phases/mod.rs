pub(super) mod dashboard;
pub(super) mod landing;
pub(super) mod phase_view;

pub(crate) use phase_view::PhaseView;
