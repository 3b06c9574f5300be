pub(crate) mod coord_seq;
pub(crate) mod wkt_writer;
