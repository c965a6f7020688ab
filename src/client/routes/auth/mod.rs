pub mod aquarium_new;
pub mod aquariums;
pub mod dashboard;
pub mod tank_detail;
pub mod tank_new;
pub mod tanks;

pub use aquarium_new::NewAquarium;
pub use aquariums::Aquariums;
pub use dashboard::Dashboard;
pub use tank_detail::TankDetail;
pub use tank_new::NewTank;
pub use tanks::Tanks;
