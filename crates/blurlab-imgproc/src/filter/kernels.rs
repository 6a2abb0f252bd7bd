use blurlab_image::ImageError;

/// A dense 2D filter kernel stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2d {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Kernel2d {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelSize`] if the kernel is empty and
    /// [`ImageError::InvalidChannelShape`] if `data` does not hold `rows * cols` weights.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if rows == 0 || cols == 0 {
            return Err(ImageError::InvalidKernelSize(cols, rows));
        }
        if data.len() != rows * cols {
            return Err(ImageError::InvalidChannelShape(data.len(), rows * cols));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a kernel as the outer product `kernel_y * kernel_x^T`.
    ///
    /// # Arguments
    ///
    /// * `kernel_x` - The horizontal 1D kernel, giving the number of columns.
    /// * `kernel_y` - The vertical 1D kernel, giving the number of rows.
    pub fn outer(kernel_x: &[f32], kernel_y: &[f32]) -> Result<Self, ImageError> {
        let data = kernel_y
            .iter()
            .flat_map(|&ky| kernel_x.iter().map(move |&kx| ky * kx))
            .collect();
        Self::new(kernel_y.len(), kernel_x.len(), data)
    }

    /// Number of kernel rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of kernel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The anchor as `(column, row)`, i.e. the kernel center.
    pub fn anchor(&self) -> (usize, usize) {
        (self.cols / 2, self.rows / 2)
    }

    /// The weights as a row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The weight at `(row, col)`, if inside the kernel.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// The kernel rotated by 180 degrees, flipped around both axes.
    ///
    /// Correlating with the flipped kernel is the same as convolving with the original one.
    pub fn flipped(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().rev().copied().collect(),
        }
    }
}

/// Derive a gaussian standard deviation from the kernel size.
///
/// Uses `sigma = 0.3 * ((kernel_size - 1) * 0.5 - 1) + 0.8`.
pub fn gaussian_sigma_from_size(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn box_kernel_1d(kernel_size: usize) -> Vec<f32> {
    vec![1.0 / kernel_size as f32; kernel_size]
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel. A non-positive value is replaced by
///   [`gaussian_sigma_from_size`].
///
/// # Returns
///
/// A vector of the kernel, normalized to sum one.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        gaussian_sigma_from_size(kernel_size)
    };

    let mean = (kernel_size as f32 - 1.0) / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    let mut kernel = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - mean;
            (-(x * x) / (2.0 * sigma_sq)).exp()
        })
        .collect::<Vec<_>>();

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Create a square 2D gaussian kernel from two identical 1D gaussians.
///
/// # Arguments
///
/// * `kernel_size` - The side of the kernel, odd and positive.
/// * `sigma` - The standard deviation; non-positive derives it from the size.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] when `kernel_size` is zero or even.
///
/// # Example
///
/// ```
/// use blurlab_imgproc::filter::kernels::gaussian_kernel_2d;
///
/// let kernel = gaussian_kernel_2d(5, 1.0).unwrap();
/// assert_eq!(kernel.rows(), 5);
/// assert!((kernel.sum() - 1.0).abs() < 1e-5);
/// ```
pub fn gaussian_kernel_2d(kernel_size: usize, sigma: f32) -> Result<Kernel2d, ImageError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size, kernel_size));
    }

    let kernel_1d = gaussian_kernel_1d(kernel_size, sigma);
    let kernel = Kernel2d::outer(&kernel_1d, &kernel_1d)?;

    log::debug!(
        "built {}x{} gaussian kernel, sigma={}, sum={}",
        kernel.rows(),
        kernel.cols(),
        sigma,
        kernel.sum()
    );

    Ok(kernel)
}
