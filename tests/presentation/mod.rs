mod environment_test;
mod multipart_test;
