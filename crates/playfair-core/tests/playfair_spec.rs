use std::collections::HashSet;

use speculate::speculate;

use playfair_core::key_matrix::ALPHABET;
use playfair_core::*;

speculate! {
    const KEYWORDS: [&str; 6] = ["", "haoye", "playfairexample", "JUMBLE", "zzzzzz", "thequickbrownfoxjumpsoverthelazydog"];

    describe "the key matrix" {
        it "should contain every letter but j exactly once" {
            for keyword in KEYWORDS {
                let matrix = build_matrix(keyword).unwrap();
                let letters: Vec<char> = matrix.letters().collect();
                let unique: HashSet<char> = letters.iter().copied().collect();

                assert_eq!(letters.len(), 25, "keyword {:?}", keyword);
                assert_eq!(unique.len(), 25, "keyword {:?}", keyword);
                assert!(!unique.contains(&'j'), "keyword {:?}", keyword);
                for c in ALPHABET.chars().filter(|&c| c != 'j') {
                    assert!(unique.contains(&c), "{} missing for keyword {:?}", c, keyword);
                }
            }
        }

        it "should be deterministic" {
            for keyword in KEYWORDS {
                assert_eq!(build_matrix(keyword).unwrap(), build_matrix(keyword).unwrap());
            }
        }

        it "should start with the deduplicated keyword" {
            let matrix = build_matrix("playfairexample").unwrap();
            let rows: Vec<String> = (0..5).map(|i| matrix.row(i)).collect();

            assert_eq!(rows, vec!["playf", "irexm", "bcdgh", "knoqs", "tuvwz"]);
        }
    }

    describe "encryption" {
        it "should encrypt the demo sample" {
            assert_eq!(encrypt("helloworld", "haoye").unwrap(), "ahmwrdodwrfw");
        }

        it "should pad a single letter into one digraph" {
            let ciphertext = encrypt("a", "haoye").unwrap();

            assert_eq!(ciphertext.len(), 2);
            assert_eq!(ciphertext, "yv");
        }

        it "should not split a repeat that spans two digraphs" {
            assert_eq!(encrypt("book", "haoye").unwrap(), "dhal");
        }

        it "should match the classic textbook example" {
            assert_eq!(
                encrypt("hidethegoldinthetreestump", "playfairexample").unwrap(),
                "bmodzbxdnabekudmuixmmouvif"
            );
        }

        it "should produce an even number of j free letters" {
            for plaintext in ["j", "jj", "jazz", "oddletters", "Mississippi"] {
                let ciphertext = encrypt(plaintext, "keyword").unwrap();

                assert_eq!(ciphertext.len() % 2, 0);
                assert!(!ciphertext.contains('j'));
                assert!(ciphertext.chars().all(|c| c.is_ascii_lowercase()));
            }
        }

        it "should reuse one matrix for many messages" {
            let cipher = Playfair::new("haoye", PlayfairOptions::default()).unwrap();

            assert_eq!(cipher.encrypt("helloworld").unwrap(), "ahmwrdodwrfw");
            assert_eq!(cipher.encrypt("book").unwrap(), "dhal");
            assert_eq!(cipher.matrix(), &build_matrix("haoye").unwrap());
        }
    }

    describe "invalid input" {
        it "should reject digits in the plaintext" {
            let err = encrypt("agent007", "haoye").unwrap_err();

            assert_eq!(err.to_string(), "Plaintext contains the invalid character '0' at position 5");
        }

        it "should reject spaces in the keyword" {
            assert!(matches!(
                build_matrix("play fair"),
                Err(PlayfairError::InvalidKeywordCharacter { character: ' ', position: 4 })
            ));
        }

        it "should skip non letters on request" {
            let options = PlayfairOptions::default().with_non_letters(NonLetterPolicy::Skip);
            let cipher = Playfair::new("playfair example", options).unwrap();

            assert_eq!(
                cipher.encrypt("Hide the gold in the tree stump").unwrap(),
                "bmodzbxdnabekudmuixmmouvif"
            );
        }
    }
}
