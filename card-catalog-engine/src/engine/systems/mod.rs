/// Stop flag and teardown event shared by the per-frame presentation loops.
pub mod frame_loop;
