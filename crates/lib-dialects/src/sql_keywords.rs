//! Keyword tables for standard SQL, one phrase per line.

pub(crate) const SQL_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
ALTER COLUMN
ALTER TABLE
DELETE FROM
EXCEPT
FETCH FIRST
FROM
GROUP BY
HAVING
INSERT INTO
INSERT
LIMIT
MODIFY
ORDER BY
SELECT
SET CURRENT SCHEMA
SET SCHEMA
SET
UPDATE
VALUES
WHERE
";

pub(crate) const SQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS: &str = "INTERSECT
INTERSECT ALL
MINUS
UNION
UNION ALL
";

pub(crate) const SQL_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS JOIN
ELSE
FULL JOIN
FULL OUTER JOIN
INNER JOIN
JOIN
LEFT JOIN
LEFT OUTER JOIN
NATURAL JOIN
OR
RIGHT JOIN
RIGHT OUTER JOIN
WHEN
XOR
";

pub(crate) const SQL_RESERVED_KEYWORDS: &str = "ACTION
ALL
ANY
AS
ASC
AUTHORIZATION
AUTO_INCREMENT
BETWEEN
BOTH
BY
CASCADE
CAST
CHARACTER SET
CHECK
COALESCE
COLLATE
COLUMN
CONSTRAINT
CREATE
CURRENT_DATE
CURRENT_TIME
CURRENT_TIMESTAMP
CURRENT_USER
DATABASE
DEFAULT
DELETE
DESC
DESCRIBE
DISTINCT
DROP
EACH
ESCAPE
EXCLUSIVE
EXISTS
EXPLAIN
FALSE
FOR
FOREIGN KEY
FULL
GRANT
GROUP
IDENTITY
IF
IN
INDEX
INNER
INTERVAL
INTO
IS
KEY
LEADING
LEFT
LIKE
LOCK
MATCH
MERGE
NATURAL
NOT
NULL
NULLIF
OFFSET
ON
ONLY
OPTION
ORDER
OUTER
OVER
OVERLAPS
PARTITION BY
PRECEDING
PRIMARY KEY
PRIVILEGES
PROCEDURE
PUBLIC
RANGE
REFERENCES
RENAME
REPLACE
RESTRICT
REVOKE
RIGHT
ROLLBACK
ROW
ROWS
SCHEMA
SEPARATOR
SESSION_USER
SOME
SYSTEM_USER
TABLE
TEMPORARY
THEN
TO
TRAILING
TRANSACTION
TRIGGER
TRUE
UNBOUNDED
UNIQUE
UNSIGNED
USER
USING
VIEW
WINDOW
WITH
WITHIN GROUP
";
