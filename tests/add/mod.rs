mod adding_a_file_name_with_a_line_break_fails;
mod adding_a_missing_file_fails;
mod adding_a_removed_file_cancels_the_removal;
