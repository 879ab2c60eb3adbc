/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

#[macro_use]
mod support;


mod concurrent_tests;
mod integer_tests;
mod scalar_tests;
