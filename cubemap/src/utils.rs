use opencv::{prelude::*, self as cv};
use image::ImageBuffer;

/* Creates an opencv image that uses provided memory slice */
pub fn make_cv_image<T>(width: usize, height: usize, data: &mut [T]) -> cv::Result<cv::core::Mat> {
    let elements_per_pixel = data.len() / (width * height).max(1);
    let element_size = std::mem::size_of::<T>();
    let image_type = match (element_size, elements_per_pixel) {
        (1, 1) => cv::core::CV_8UC1, (1, 3) => cv::core::CV_8UC3,
        (2, 1) => cv::core::CV_16UC1, (2, 3) => cv::core::CV_16UC3,
        (4, 1) => cv::core::CV_32FC1, (4, 3) => cv::core::CV_32FC3,
        _ => return Err(cv::Error::new(cv::core::StsBadArg, format!(
            "no opencv type for {elements_per_pixel} channels of {element_size} bytes"
        ))),
    };
    let row_bytes = width * element_size * elements_per_pixel;
    unsafe {
        cv::core::Mat::new_rows_cols_with_data(
            height as i32, width as i32, image_type,
            data.as_mut_ptr() as *mut std::os::raw::c_void,
            row_bytes
        )
    }
}

/* Reads an 8 bit, 3 channel image. Channels stay in OpenCV's BGR order. */
pub fn read_image(file_path: &str) -> cv::Result<ImageBuffer<3,u8>> {
    let mat = cv::imgcodecs::imread(file_path, cv::imgcodecs::IMREAD_COLOR)?;
    if mat.rows() <= 0 || mat.cols() <= 0 {
        return Err(cv::Error::new(cv::core::StsError, format!("could not read image {file_path}")));
    }
    let (width, height) = (mat.cols() as usize, mat.rows() as usize);
    let mat = if mat.is_continuous() { mat } else { mat.try_clone()? };
    Ok(ImageBuffer::new_with_data(width, height, mat.data_bytes()?.to_vec()))
}

pub fn write_image(file_path: &str, image: &ImageBuffer<3,u8>) -> cv::Result<()> {
    let mut data = image.data.clone();
    let cv_image = make_cv_image(image.width, image.height, data.as_mut_slice())?;
    if cv::imgcodecs::imwrite(file_path, &cv_image, &cv::types::VectorOfi32::new())? {
        Ok(())
    } else {
        Err(cv::Error::new(cv::core::StsError, format!("could not write image {file_path}")))
    }
}
