pub mod a001_fortune_cookie;
