/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static ENCODE_HELP: &str = "Convert an image to a memory image

The image is converted to 8 bit grayscale and resized with bilinear
interpolation to the memory geometry (--width x --height, 256x256 by
default). Each pixel is written as two uppercase hex digits per line,
row-major, the layout $readmemh expects.

With --noise, salt and pepper noise is added after resizing so the
output can be used as a test vector for the median filter.";

pub static FILTER_HELP: &str = "Median filter a memory image

Every pixel is replaced by the median of its 3x3 neighbourhood using
the same comparison network the FPGA median unit implements. The
result is written as a memory image that hardware output can be
compared against with the compare subcommand.";

pub static EDGES_HELP: &str = "Sobel edge detection on a memory image

The gradient magnitude of every pixel is computed from its 3x3
neighbourhood with the Sobel Gx and Gy kernels, then scaled so the
strongest edge is 255 and the weakest is 0. A uniform image has no
edges and is written as all zeros.";

pub static BORDER_HELP: &str = "How pixels outside the image are produced

reflect:   mirror without repeating the edge pixel (dcb|abcd|cba)
symmetric: mirror repeating the edge pixel (cba|abcd|dcb)
replicate: repeat the edge pixel (aaa|abcd|ddd)";

pub static NETWORK_HELP: &str = "Comparison network selecting the median

four-pass: eight phases, the network the FPGA median unit runs. Misses
           the true median for some neighbourhoods, output is bit
           identical to the hardware
full:      nine phase odd-even transposition sort, always the true median";
