pub(crate) mod cutter;
pub(crate) mod svg_raster;
