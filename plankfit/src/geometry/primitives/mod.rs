mod edge;
mod o_rect;
mod point;
mod rect;
mod simple_polygon;

pub use edge::Edge;
pub use edge::PARALLEL_EPS;
pub use o_rect::BOUNDARY_TOL;
pub use o_rect::ORect;
pub use o_rect::SAT_TOL;
pub use point::Point;
pub use rect::Rect;
pub use simple_polygon::SPolygon;
