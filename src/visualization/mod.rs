pub mod replay_vis2d;
