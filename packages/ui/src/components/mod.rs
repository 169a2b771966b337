//! Themed building blocks shared by every view.

mod button;
mod card;
mod exam_card;
mod footer;
mod header;
mod input;
mod loading;
mod modal;
mod pagination;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle, CardVariant};
pub use exam_card::ExamCard;
pub use footer::Footer;
pub use header::Header;
pub use input::{Input, InputVariant};
pub use loading::{Loading, LoadingSize};
pub use modal::{ConfirmModal, Modal};
pub use pagination::Pagination;
